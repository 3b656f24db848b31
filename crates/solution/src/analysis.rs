//! Pallet and pack properties a solution is evaluated against.

use u_pallet_core::{ContainerFootprint, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sheet laid between two layers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interlayer {
    /// Thickness added to the stack height.
    pub thickness: f64,
    /// Weight added to the pallet weight.
    pub weight: f64,
}

impl Interlayer {
    /// Creates an interlayer.
    pub fn new(thickness: f64, weight: f64) -> Self {
        Self { thickness, weight }
    }
}

/// Physical properties of the pallet, the packs and the optional interlayer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletAnalysis {
    pallet_length: f64,
    pallet_width: f64,
    pallet_height: f64,
    pallet_weight: f64,
    pack_weight: f64,
    csu_per_pack: usize,
    interlayer: Option<Interlayer>,
    max_height: Option<f64>,
}

impl PalletAnalysis {
    /// Creates an analysis for a pallet of the given dimensions.
    ///
    /// Weights default to zero and each pack holds one consumer unit.
    pub fn new(pallet_length: f64, pallet_width: f64, pallet_height: f64) -> Self {
        Self {
            pallet_length,
            pallet_width,
            pallet_height,
            pallet_weight: 0.0,
            pack_weight: 0.0,
            csu_per_pack: 1,
            interlayer: None,
            max_height: None,
        }
    }

    /// Sets the empty pallet weight.
    pub fn with_pallet_weight(mut self, weight: f64) -> Self {
        self.pallet_weight = weight;
        self
    }

    /// Sets the weight of one pack.
    pub fn with_pack_weight(mut self, weight: f64) -> Self {
        self.pack_weight = weight;
        self
    }

    /// Sets the number of consumer units in one pack.
    pub fn with_csu_per_pack(mut self, count: usize) -> Self {
        self.csu_per_pack = count;
        self
    }

    /// Sets the interlayer used by slots flagged with one.
    pub fn with_interlayer(mut self, interlayer: Interlayer) -> Self {
        self.interlayer = Some(interlayer);
        self
    }

    /// Sets the maximum loaded pallet height.
    pub fn with_max_height(mut self, height: f64) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Returns the pallet length.
    pub fn pallet_length(&self) -> f64 {
        self.pallet_length
    }

    /// Returns the pallet width.
    pub fn pallet_width(&self) -> f64 {
        self.pallet_width
    }

    /// Returns the pallet deck height.
    pub fn pallet_height(&self) -> f64 {
        self.pallet_height
    }

    /// Returns the pallet deck as a container footprint.
    pub fn pallet_footprint(&self) -> ContainerFootprint {
        ContainerFootprint::new(self.pallet_length, self.pallet_width)
    }

    /// Returns the empty pallet weight.
    pub fn pallet_weight(&self) -> f64 {
        self.pallet_weight
    }

    /// Returns the weight of one pack.
    pub fn pack_weight(&self) -> f64 {
        self.pack_weight
    }

    /// Returns the number of consumer units in one pack.
    pub fn csu_per_pack(&self) -> usize {
        self.csu_per_pack
    }

    /// Returns the interlayer, if any.
    pub fn interlayer(&self) -> Option<&Interlayer> {
        self.interlayer.as_ref()
    }

    /// Interlayer thickness, zero without an interlayer.
    pub fn interlayer_thickness(&self) -> f64 {
        self.interlayer.map_or(0.0, |i| i.thickness)
    }

    /// Interlayer weight, zero without an interlayer.
    pub fn interlayer_weight(&self) -> f64 {
        self.interlayer.map_or(0.0, |i| i.weight)
    }

    /// Returns the maximum loaded pallet height, if constrained.
    pub fn max_height(&self) -> Option<f64> {
        self.max_height
    }

    /// Checks dimensions, weights and constraints.
    pub fn validate(&self) -> Result<()> {
        self.pallet_footprint().validate()?;
        if !self.pallet_height.is_finite() || self.pallet_height < 0.0 {
            return Err(Error::InvalidBoundary(format!(
                "pallet height must be non-negative, got {}",
                self.pallet_height
            )));
        }
        if !self.pallet_weight.is_finite()
            || self.pallet_weight < 0.0
            || !self.pack_weight.is_finite()
            || self.pack_weight < 0.0
        {
            return Err(Error::ConfigError("weights must be non-negative".into()));
        }
        if let Some(interlayer) = &self.interlayer {
            let valid = |v: f64| v.is_finite() && v >= 0.0;
            if !valid(interlayer.thickness) || !valid(interlayer.weight) {
                return Err(Error::ConfigError(
                    "interlayer thickness and weight must be non-negative".into(),
                ));
            }
        }
        if let Some(max_height) = self.max_height {
            if max_height <= self.pallet_height {
                return Err(Error::InvalidBoundary(format!(
                    "maximum height {} does not clear the pallet height {}",
                    max_height, self.pallet_height
                )));
            }
        }
        Ok(())
    }
}
