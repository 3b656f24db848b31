//! Diagonal pattern: a staircase of quarter-turned boxes.
//!
//! Rung `i` of `n + 1` places one rotated box on the diagonal, then a run of
//! `n - i` upright boxes to its right and another run of `n - i` upright boxes
//! above it. The tiled footprint is `(w + n·l) × (l + n·w)` for a tile of
//! length `l` and width `w`; it holds `(n + 1)²` boxes and leaves
//! `n·(l - w)²` uncovered.

use u_pallet_core::Result;

use super::{add_tile, LayerDimensions, Pattern, EXTENT_EPSILON};
use crate::layer::Layer;

/// Staircase of rotated boxes flanked by straight runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagonal;

impl Diagonal {
    /// Number of rungs, or `None` when one rotated box does not fit.
    fn step_count(layer: &Layer) -> Option<usize> {
        let (cell_length, cell_width) = (layer.cell_length(), layer.cell_width());
        if cell_length <= 0.0 || cell_width <= 0.0 {
            return None;
        }
        let along_length =
            ((layer.container_length() - cell_width + EXTENT_EPSILON) / cell_length).floor();
        let along_width =
            ((layer.container_width() - cell_length + EXTENT_EPSILON) / cell_width).floor();
        let steps = along_length.min(along_width);
        if !steps.is_finite() || steps < 0.0 {
            return None;
        }
        Some(steps as usize + 1)
    }
}

impl Pattern for Diagonal {
    fn name(&self) -> &'static str {
        "Diagonal"
    }

    fn layer_dimensions(&self, layer: &Layer) -> LayerDimensions {
        let Some(steps) = Self::step_count(layer) else {
            return LayerDimensions::infeasible();
        };
        let n = (steps - 1) as f64;
        LayerDimensions::new(
            true,
            layer.cell_width() + n * layer.cell_length(),
            layer.cell_length() + n * layer.cell_width(),
        )
    }

    fn generate_layer(&self, layer: &mut Layer, actual_length: f64, actual_width: f64) -> Result<()> {
        layer.clear();
        layer.set_pattern_name(self.name());

        let Some(steps) = Self::step_count(layer) else {
            return Ok(());
        };
        let (cell_length, cell_width) = (layer.cell_length(), layer.cell_width());
        let n = steps - 1;

        let (space_x, space_y) = if n > 0 {
            (
                (actual_length - (cell_width + n as f64 * cell_length)) / n as f64,
                (actual_width - (cell_length + n as f64 * cell_width)) / n as f64,
            )
        } else {
            (0.0, 0.0)
        };
        let step_x = cell_length + space_x;
        let step_y = cell_width + space_y;

        let offset_x = 0.5 * (layer.container_length() - actual_length);
        let offset_y = 0.5 * (layer.container_width() - actual_width);

        for i in 0..steps {
            let x = offset_x + i as f64 * step_x;
            let y = offset_y + i as f64 * step_y;
            add_tile(layer, x, y, true)?;

            let run = n - i;
            for k in 0..run {
                add_tile(layer, x + cell_width + space_x + k as f64 * step_x, y, false)?;
            }
            for k in 0..run {
                add_tile(layer, x, y + cell_length + space_y + k as f64 * step_y, false)?;
            }
        }

        layer.update_max_space(space_x);
        layer.update_max_space(space_y);
        layer.update_max_space((cell_length - cell_width).abs());
        Ok(())
    }

    fn can_be_swapped(&self) -> bool {
        true
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
    fn test_layer_dimensions() {
        // floor((120 - 30) / 40) = 2, floor((100 - 40) / 30) = 2
        let l = layer(120.0, 100.0);
        let dims = Diagonal.layer_dimensions(&l);
        assert!(dims.feasible);
        assert_relative_eq!(dims.length, 110.0);
        assert_relative_eq!(dims.width, 100.0);
    }

    #[test]
    fn test_generate_counts_rungs() {
        let mut l = layer(120.0, 100.0);
        assert!(Diagonal.generate(&mut l).unwrap());
        assert_eq!(l.box_count(), 9);
        assert_relative_eq!(l.maximum_space(), 10.0);

        let bbox = l.bounding_box().unwrap();
        assert_relative_eq!(bbox.min_x, 5.0);
        assert_relative_eq!(bbox.max_x, 115.0);
        assert_relative_eq!(bbox.min_y, 0.0);
        assert_relative_eq!(bbox.max_y, 100.0);
    }

    #[test]
    fn test_single_rung() {
        let mut l = layer(35.0, 45.0);
        assert!(Diagonal.generate(&mut l).unwrap());
        assert_eq!(l.box_count(), 1);
        let p = l.positions()[0];
        assert_eq!(p.length_axis(), Axis::YPos);
    }

    #[test]
    fn test_infeasible_when_rotated_box_does_not_fit() {
        let l = layer(120.0, 35.0);
        assert!(!Diagonal.layer_dimensions(&l).feasible);
    }

    #[test]
    fn test_square_boxes_tile_exactly() {
        let mut l = Layer::new(
            BoxDimensions::new(20.0, 20.0, 10.0),
            ContainerFootprint::new(60.0, 60.0),
            Axis::ZPos,
            false,
        );
        assert!(Diagonal.generate(&mut l).unwrap());
        assert_eq!(l.box_count(), 9);
        assert_relative_eq!(l.maximum_space(), 0.0);
        assert_relative_eq!(l.area_efficiency(), 100.0);
    }
}
