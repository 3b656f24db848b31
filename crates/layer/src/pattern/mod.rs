//! Layer tiling patterns.
//!
//! Each pattern first computes, without placing anything, the largest
//! footprint it can tile on the layer's container
//! ([`Pattern::layer_dimensions`]), then fills that footprint centered on the
//! container ([`Pattern::generate_layer`]).
//!
//! # Example
//!
//! ```
//! use u_pallet_core::{Axis, BoxDimensions, ContainerFootprint};
//! use u_pallet_layer::{Layer, LayerPattern, Pattern};
//!
//! let mut layer = Layer::new(
//!     BoxDimensions::new(40.0, 20.0, 15.0),
//!     ContainerFootprint::new(120.0, 80.0),
//!     Axis::ZPos,
//!     false,
//! );
//! let dims = LayerPattern::Column.layer_dimensions(&layer);
//! assert!(dims.feasible);
//! LayerPattern::Column
//!     .generate_layer(&mut layer, dims.length, dims.width)
//!     .unwrap();
//! assert_eq!(layer.box_count(), 12);
//! ```

mod column;
mod diagonal;
mod enlarged_spiral;

pub use column::Column;
pub use diagonal::Diagonal;
pub use enlarged_spiral::{EnlargedSpiral, SpiralSizes};

use nalgebra::Point2;
use std::fmt;
use u_pallet_core::{Axis, Result};

use crate::layer::Layer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Slack used when comparing tiled extents.
pub(crate) const EXTENT_EPSILON: f64 = 1e-9;

/// Footprint a pattern can tile on a layer's container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerDimensions {
    /// False when not even one box fits under the pattern's geometry.
    pub feasible: bool,
    /// Tiled length.
    pub length: f64,
    /// Tiled width.
    pub width: f64,
}

impl LayerDimensions {
    /// Creates layer dimensions.
    pub fn new(feasible: bool, length: f64, width: f64) -> Self {
        Self {
            feasible,
            length,
            width,
        }
    }

    /// Dimensions reported for a container that cannot hold the pattern.
    pub fn infeasible() -> Self {
        Self::new(false, 0.0, 0.0)
    }
}

/// Capability interface shared by all tiling patterns.
pub trait Pattern {
    /// Stable identifier.
    fn name(&self) -> &'static str;

    /// Computes the largest footprint the pattern can tile on `layer`.
    fn layer_dimensions(&self, layer: &Layer) -> LayerDimensions;

    /// Clears `layer` and fills an `actual_length` × `actual_width` footprint
    /// centered on its container.
    fn generate_layer(&self, layer: &mut Layer, actual_length: f64, actual_width: f64)
        -> Result<()>;

    /// Whether a half-turned copy of the layer differs from the layer.
    fn can_be_swapped(&self) -> bool;

    /// Whether a mirrored copy of the layer differs from the layer.
    fn can_be_inverted(&self) -> bool;

    /// Number of distinct variants the pattern produces for `layer`.
    fn number_of_variants(&self, _layer: &Layer) -> usize {
        1
    }

    /// Computes the layer dimensions and generates the layer when feasible.
    ///
    /// Returns whether the layer was generated.
    fn generate(&self, layer: &mut Layer) -> Result<bool> {
        let dims = self.layer_dimensions(layer);
        if !dims.feasible {
            layer.clear();
            return Ok(false);
        }
        self.generate_layer(layer, dims.length, dims.width)?;
        Ok(true)
    }
}

/// The closed set of available patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LayerPattern {
    /// Aligned grid.
    Column,
    /// Staircase of rotated boxes with straight runs.
    Diagonal,
    /// Pinwheel of four blocks around a filled center.
    EnlargedSpiral,
}

impl LayerPattern {
    /// All patterns.
    pub const ALL: [LayerPattern; 3] = [
        LayerPattern::Column,
        LayerPattern::Diagonal,
        LayerPattern::EnlargedSpiral,
    ];

    /// Looks a pattern up by its [`Pattern::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    fn strategy(&self) -> &'static dyn Pattern {
        match self {
            LayerPattern::Column => &Column,
            LayerPattern::Diagonal => &Diagonal,
            LayerPattern::EnlargedSpiral => &EnlargedSpiral,
        }
    }
}

impl Pattern for LayerPattern {
    fn name(&self) -> &'static str {
        self.strategy().name()
    }

    fn layer_dimensions(&self, layer: &Layer) -> LayerDimensions {
        self.strategy().layer_dimensions(layer)
    }

    fn generate_layer(
        &self,
        layer: &mut Layer,
        actual_length: f64,
        actual_width: f64,
    ) -> Result<()> {
        self.strategy()
            .generate_layer(layer, actual_length, actual_width)
    }

    fn can_be_swapped(&self) -> bool {
        self.strategy().can_be_swapped()
    }

    fn can_be_inverted(&self) -> bool {
        self.strategy().can_be_inverted()
    }

    fn number_of_variants(&self, layer: &Layer) -> usize {
        self.strategy().number_of_variants(layer)
    }
}

impl fmt::Display for LayerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of whole tiles of size `tile` fitting in `extent`.
pub(crate) fn tile_count(extent: f64, tile: f64) -> usize {
    if !extent.is_finite() || tile <= 0.0 || extent < tile - EXTENT_EPSILON {
        return 0;
    }
    ((extent + EXTENT_EPSILON) / tile).floor() as usize
}

/// Adds one tile with its lower-left corner at (`x`, `y`).
///
/// An upright tile spans `cell_length` along x; a rotated tile is turned a
/// quarter and spans `cell_width` along x. Tiles falling off the container
/// are logged and skipped.
pub(crate) fn add_tile(layer: &mut Layer, x: f64, y: f64, rotated: bool) -> Result<()> {
    let (anchor, length_axis, width_axis) = if rotated {
        (
            Point2::new(x + layer.cell_width(), y),
            Axis::YPos,
            Axis::XNeg,
        )
    } else {
        (Point2::new(x, y), Axis::XPos, Axis::YPos)
    };

    if !layer.is_valid_position(anchor, length_axis, width_axis) {
        log::warn!(
            "Skipping tile at ({:.3}, {:.3}) outside the container in pattern '{}'",
            x,
            y,
            layer.pattern_name()
        );
        return Ok(());
    }
    layer.add_position(anchor, length_axis, width_axis)
}

/// Adds a `cols` × `rows` block of identically oriented tiles starting at (`x`, `y`).
pub(crate) fn add_block(
    layer: &mut Layer,
    x: f64,
    y: f64,
    cols: usize,
    rows: usize,
    rotated: bool,
) -> Result<()> {
    let (step_x, step_y) = if rotated {
        (layer.cell_width(), layer.cell_length())
    } else {
        (layer.cell_length(), layer.cell_width())
    };
    for i in 0..cols {
        for j in 0..rows {
            add_tile(
                layer,
                x + i as f64 * step_x,
                y + j as f64 * step_y,
                rotated,
            )?;
        }
    }
    Ok(())
}
