//! # U-Pallet Layer
//!
//! Single-layer box tiling for the U-Pallet engine.
//!
//! A [`Layer`] holds the positions of identical boxes over a container
//! footprint; a [`Pattern`] fills it. Candidate layers for several patterns
//! and stacking axes are ranked by [`LayerComparer`], or generated and ranked
//! in one call by [`evaluate_candidates`].

pub mod candidates;
pub mod comparer;
pub mod layer;
pub mod pattern;

// Re-exports
pub use candidates::{all_descriptors, evaluate_candidates};
pub use comparer::LayerComparer;
pub use layer::{Layer, PatternDescriptor};
pub use pattern::{
    Column, Diagonal, EnlargedSpiral, LayerDimensions, LayerPattern, Pattern, SpiralSizes,
};
pub use u_pallet_core::{Axis, BoxDimensions, Config, ContainerFootprint, Error, Result};
