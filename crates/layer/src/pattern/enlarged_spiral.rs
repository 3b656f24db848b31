//! Enlarged spiral pattern.
//!
//! Four blocks turn around the footprint center like a pinwheel: area 1
//! (upright boxes) sits in the lower-left and upper-right corners, area 2
//! (rotated boxes) in the lower-right and upper-left corners. The hole the
//! pinwheel leaves in the middle is filled by area 3, a single block whose
//! orientation is chosen by the size search.

use u_pallet_core::Result;

use super::{add_block, tile_count, LayerDimensions, Pattern, EXTENT_EPSILON};
use crate::layer::Layer;

/// Grid sizes of the three areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpiralSizes {
    /// Columns of area 1.
    pub i1: usize,
    /// Rows of area 1.
    pub j1: usize,
    /// Columns of area 2.
    pub i2: usize,
    /// Rows of area 2.
    pub j2: usize,
    /// Columns of area 3.
    pub i3: usize,
    /// Rows of area 3.
    pub j3: usize,
    /// Orientation of area 3: 0 = upright, 1 = rotated.
    pub dir_area3: usize,
}

impl SpiralSizes {
    /// Total number of boxes.
    pub fn count(&self) -> usize {
        2 * (self.i1 * self.j1 + self.i2 * self.j2) + self.i3 * self.j3
    }

    /// True when both corner areas hold at least one box.
    pub fn is_feasible(&self) -> bool {
        self.i1 > 0 && self.j1 > 0 && self.i2 > 0 && self.j2 > 0
    }

    fn area1(&self, cell_length: f64, cell_width: f64) -> (f64, f64) {
        (self.i1 as f64 * cell_length, self.j1 as f64 * cell_width)
    }

    fn area2(&self, cell_length: f64, cell_width: f64) -> (f64, f64) {
        (self.i2 as f64 * cell_width, self.j2 as f64 * cell_length)
    }

    fn area3(&self, cell_length: f64, cell_width: f64) -> (f64, f64) {
        if self.dir_area3 == 0 {
            (self.i3 as f64 * cell_length, self.j3 as f64 * cell_width)
        } else {
            (self.i3 as f64 * cell_width, self.j3 as f64 * cell_length)
        }
    }
}

/// Returns true when the pinwheel corners would collide: one corner area
/// is larger than the other along both axes.
///
/// Area 1 larger on both axes makes the lower-left and upper-right area 1
/// blocks overlap; area 1 smaller on both axes makes the lower-right and
/// upper-left area 2 blocks overlap.
fn unbalanced(area1: (f64, f64), area2: (f64, f64)) -> bool {
    let wider = area1.0 > area2.0 + EXTENT_EPSILON;
    let narrower = area1.0 < area2.0 - EXTENT_EPSILON;
    let taller = area1.1 > area2.1 + EXTENT_EPSILON;
    let shorter = area1.1 < area2.1 - EXTENT_EPSILON;
    (wider && taller) || (narrower && shorter)
}

/// Pinwheel with a filled center.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnlargedSpiral;

impl EnlargedSpiral {
    /// Searches the area sizes maximizing the box count for `length` × `width`.
    ///
    /// Candidates are visited with `i1` ascending, then `j1`, then the area 3
    /// orientation; the first best count found is kept.
    pub fn compute_sizes(
        length: f64,
        width: f64,
        cell_length: f64,
        cell_width: f64,
    ) -> Option<SpiralSizes> {
        let max_i1 = tile_count(length, cell_length);
        let max_j1 = tile_count(width, cell_width);

        let mut best: Option<SpiralSizes> = None;
        for i1 in 1..=max_i1 {
            for j1 in 1..=max_j1 {
                let area1 = (i1 as f64 * cell_length, j1 as f64 * cell_width);
                let i2 = tile_count(length - area1.0, cell_width);
                let j2 = tile_count(width - area1.1, cell_length);
                if i2 == 0 || j2 == 0 {
                    continue;
                }
                let area2 = (i2 as f64 * cell_width, j2 as f64 * cell_length);
                if unbalanced(area1, area2) {
                    continue;
                }

                let hole_x = (area1.0 - area2.0).abs();
                let hole_y = (area1.1 - area2.1).abs();
                for dir_area3 in 0..2 {
                    let (i3, j3) = if dir_area3 == 0 {
                        (tile_count(hole_x, cell_length), tile_count(hole_y, cell_width))
                    } else {
                        (tile_count(hole_x, cell_width), tile_count(hole_y, cell_length))
                    };
                    let candidate = SpiralSizes {
                        i1,
                        j1,
                        i2,
                        j2,
                        i3,
                        j3,
                        dir_area3,
                    };
                    if best.map_or(true, |b| candidate.count() > b.count()) {
                        best = Some(candidate);
                    }
                }
            }
        }

        if let Some(sizes) = &best {
            log::debug!(
                "Enlarged spiral on {:.1} x {:.1}: {:?} ({} boxes)",
                length,
                width,
                sizes,
                sizes.count()
            );
        }
        best
    }

    fn sizes(layer: &Layer) -> Option<SpiralSizes> {
        Self::compute_sizes(
            layer.container_length(),
            layer.container_width(),
            layer.cell_length(),
            layer.cell_width(),
        )
        .filter(SpiralSizes::is_feasible)
    }
}

impl Pattern for EnlargedSpiral {
    fn name(&self) -> &'static str {
        "EnlargedSpiral"
    }

    fn layer_dimensions(&self, layer: &Layer) -> LayerDimensions {
        let Some(sizes) = Self::sizes(layer) else {
            return LayerDimensions::infeasible();
        };
        let (cell_length, cell_width) = (layer.cell_length(), layer.cell_width());
        let area1 = sizes.area1(cell_length, cell_width);
        let area2 = sizes.area2(cell_length, cell_width);
        LayerDimensions::new(true, area1.0 + area2.0, area1.1 + area2.1)
    }

    fn generate_layer(&self, layer: &mut Layer, actual_length: f64, actual_width: f64) -> Result<()> {
        layer.clear();
        layer.set_pattern_name(self.name());

        let Some(sizes) = Self::sizes(layer) else {
            return Ok(());
        };
        let (cell_length, cell_width) = (layer.cell_length(), layer.cell_width());
        let area1 = sizes.area1(cell_length, cell_width);
        let area2 = sizes.area2(cell_length, cell_width);
        let area3 = sizes.area3(cell_length, cell_width);

        // Extra footprint opens the gap between the left and right blocks.
        let gap_x = actual_length - (area1.0 + area2.0);
        let gap_y = actual_width - (area1.1 + area2.1);

        let x0 = 0.5 * (layer.container_length() - actual_length);
        let y0 = 0.5 * (layer.container_width() - actual_width);
        let x1 = x0 + actual_length;
        let y1 = y0 + actual_width;

        // Area 1: lower-left and upper-right.
        add_block(layer, x0, y0, sizes.i1, sizes.j1, false)?;
        add_block(layer, x1 - area1.0, y1 - area1.1, sizes.i1, sizes.j1, false)?;
        // Area 2: lower-right and upper-left.
        add_block(layer, x1 - area2.0, y0, sizes.i2, sizes.j2, true)?;
        add_block(layer, x0, y1 - area2.1, sizes.i2, sizes.j2, true)?;

        // Area 3: centered in the hole.
        let hole_x = (area1.0 - area2.0).abs() + gap_x;
        let hole_y = (area1.1 - area2.1).abs() + gap_y;
        let hole_origin_x = x0 + area1.0.min(area2.0);
        let hole_origin_y = y0 + area1.1.min(area2.1);
        add_block(
            layer,
            hole_origin_x + 0.5 * (hole_x - area3.0),
            hole_origin_y + 0.5 * (hole_y - area3.1),
            sizes.i3,
            sizes.j3,
            sizes.dir_area3 == 1,
        )?;

        layer.update_max_space(gap_x);
        layer.update_max_space(gap_y);
        layer.update_max_space(hole_x - area3.0);
        layer.update_max_space(hole_y - area3.1);
        Ok(())
    }

    fn can_be_swapped(&self) -> bool {
        false
    }

    fn can_be_inverted(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use u_pallet_core::{Axis, BoxDimensions, ContainerFootprint};

    fn layer(length: f64, width: f64) -> Layer {
        Layer::new(
            BoxDimensions::new(40.0, 30.0, 20.0),
            ContainerFootprint::new(length, width),
            Axis::ZPos,
            false,
        )
    }

    #[test]
    fn test_compute_sizes() {
        let sizes = EnlargedSpiral::compute_sizes(120.0, 100.0, 40.0, 30.0).unwrap();
        assert_eq!(
            sizes,
            SpiralSizes {
                i1: 1,
                j1: 2,
                i2: 2,
                j2: 1,
                i3: 0,
                j3: 0,
                dir_area3: 0,
            }
        );
        assert_eq!(sizes.count(), 8);
    }

    #[test]
    fn test_generate_pinwheel() {
        let mut l = layer(120.0, 100.0);
        let dims = EnlargedSpiral.layer_dimensions(&l);
        assert!(dims.feasible);
        assert_relative_eq!(dims.length, 100.0);
        assert_relative_eq!(dims.width, 100.0);

        EnlargedSpiral
            .generate_layer(&mut l, dims.length, dims.width)
            .unwrap();
        assert_eq!(l.box_count(), 8);
        // 20 x 20 hole left empty in the middle.
        assert_relative_eq!(l.maximum_space(), 20.0);

        let bbox = l.bounding_box().unwrap();
        assert_relative_eq!(bbox.min_x, 10.0);
        assert_relative_eq!(bbox.max_x, 110.0);
    }

    #[test]
    fn test_fills_center() {
        // Area 1 = 3 x 1 (120 x 30), area 2 = 1 x 2 (30 x 80): the 90 x 50 hole
        // holds three rotated boxes, one more than upright.
        let sizes = EnlargedSpiral::compute_sizes(150.0, 110.0, 40.0, 30.0).unwrap();
        assert_eq!((sizes.i1, sizes.j1, sizes.i2, sizes.j2), (3, 1, 1, 2));
        assert_eq!((sizes.i3, sizes.j3, sizes.dir_area3), (3, 1, 1));
        assert_eq!(sizes.count(), 13);

        let mut l = layer(150.0, 110.0);
        assert!(EnlargedSpiral.generate(&mut l).unwrap());
        assert_eq!(l.box_count(), sizes.count());
    }

    #[test]
    fn test_infeasible_below_two_boxes() {
        let l = layer(79.0, 59.0);
        assert!(!EnlargedSpiral.layer_dimensions(&l).feasible);

        let l = layer(70.0, 50.0);
        assert!(!EnlargedSpiral.layer_dimensions(&l).feasible);
    }

    #[test]
    fn test_unbalanced() {
        assert!(unbalanced((80.0, 60.0), (30.0, 40.0)));
        assert!(unbalanced((30.0, 40.0), (80.0, 60.0)));
        assert!(!unbalanced((80.0, 30.0), (30.0, 40.0)));
        assert!(!unbalanced((30.0, 30.0), (30.0, 40.0)));
    }
}
