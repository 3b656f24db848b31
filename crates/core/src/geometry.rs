//! Box and container dimensions.

use nalgebra::Vector3;

use crate::axis::Axis;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimensions (length, width, height) of the repeated box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxDimensions {
    dimensions: Vector3<f64>,
}

impl BoxDimensions {
    /// Creates box dimensions.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            dimensions: Vector3::new(length, width, height),
        }
    }

    /// Returns the dimensions as a vector (length, width, height).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the length (box-frame x).
    pub fn length(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the width (box-frame y).
    pub fn width(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the height (box-frame z).
    pub fn height(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the extent of the box along an axis of its own frame.
    pub fn along(&self, axis: Axis) -> f64 {
        self.dimensions[axis.component()]
    }

    /// Returns the box volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Checks that all dimensions are finite and positive.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(Error::InvalidGeometry(format!(
                "box dimensions must be positive, got {} x {} x {}",
                self.length(),
                self.width(),
                self.height()
            )));
        }
        Ok(())
    }
}

/// Deck area (length, width) available to a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerFootprint {
    length: f64,
    width: f64,
}

impl ContainerFootprint {
    /// Creates a container footprint.
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    /// Returns the length (x extent).
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the width (y extent).
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the footprint area.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Checks that both dimensions are finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !self.length.is_finite()
            || !self.width.is_finite()
            || self.length <= 0.0
            || self.width <= 0.0
        {
            return Err(Error::InvalidBoundary(format!(
                "container dimensions must be positive, got {} x {}",
                self.length, self.width
            )));
        }
        Ok(())
    }
}
