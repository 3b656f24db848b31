//! Column pattern: every box in the same orientation on a regular grid.

use u_pallet_core::Result;

use super::{add_tile, tile_count, LayerDimensions, Pattern};
use crate::layer::Layer;

/// Aligned grid of identically oriented boxes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Column;

impl Column {
    fn grid_size(layer: &Layer) -> (usize, usize) {
        (
            tile_count(layer.container_length(), layer.cell_length()),
            tile_count(layer.container_width(), layer.cell_width()),
        )
    }
}

/// Gap between `count` tiles of size `tile` spread over `extent`.
fn spread(extent: f64, count: usize, tile: f64) -> f64 {
    if count > 1 {
        (extent - count as f64 * tile) / (count - 1) as f64
    } else {
        0.0
    }
}

impl Pattern for Column {
    fn name(&self) -> &'static str {
        "Column"
    }

    fn layer_dimensions(&self, layer: &Layer) -> LayerDimensions {
        let (size_x, size_y) = Self::grid_size(layer);
        if size_x == 0 || size_y == 0 {
            return LayerDimensions::infeasible();
        }
        LayerDimensions::new(
            true,
            size_x as f64 * layer.cell_length(),
            size_y as f64 * layer.cell_width(),
        )
    }

    fn generate_layer(&self, layer: &mut Layer, actual_length: f64, actual_width: f64) -> Result<()> {
        layer.clear();
        layer.set_pattern_name(self.name());

        let (size_x, size_y) = Self::grid_size(layer);
        let (cell_length, cell_width) = (layer.cell_length(), layer.cell_width());

        let offset_x = 0.5 * (layer.container_length() - actual_length);
        let offset_y = 0.5 * (layer.container_width() - actual_width);
        let space_x = spread(actual_length, size_x, cell_length);
        let space_y = spread(actual_width, size_y, cell_width);

        for i in 0..size_x {
            for j in 0..size_y {
                add_tile(
                    layer,
                    offset_x + i as f64 * (cell_length + space_x),
                    offset_y + j as f64 * (cell_width + space_y),
                    false,
                )?;
            }
        }

        layer.update_max_space(space_x);
        layer.update_max_space(space_y);
        Ok(())
    }

    fn can_be_swapped(&self) -> bool {
        false
    }

    fn can_be_inverted(&self) -> bool {
        false
    }
}
