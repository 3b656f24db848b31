//! # U-Pallet Core
//!
//! Core types shared by the U-Pallet layer and solution crates.
//!
//! ## Core Components
//!
//! - **Axis primitives**: [`Axis`], the six signed principal directions
//! - **Frames**: [`Frame`], the rotation spanned by a (length, width) axis pair
//! - **Dimensions**: [`BoxDimensions`], [`ContainerFootprint`]
//! - **Positions**: [`BoxPosition`], a realized box pose
//! - **Bounding boxes**: [`AABB2D`], [`AABB3D`]
//! - **Configuration**: [`Config`]
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod axis;
pub mod config;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod transform;

// Re-exports
pub use axis::Axis;
pub use config::{Config, DEFAULT_TOLERANCE};
pub use error::{Error, Result};
pub use geometry::{BoxDimensions, ContainerFootprint};
pub use placement::BoxPosition;
pub use transform::{half_turn_point, Frame, AABB2D, AABB3D};
