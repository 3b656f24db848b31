//! # U-Pallet
//!
//! Pallet loading engine: tiles identical boxes into layers and stacks the
//! layers into loaded pallets.
//!
//! This crate provides:
//! - **Layer tiling**: Column, Diagonal and EnlargedSpiral patterns over a
//!   pallet deck, for any of the six box orientations
//! - **Layer ranking**: candidate layers ordered by boxes per clearance height
//! - **Pallet solutions**: stacked layers with interlayers, weights, heights
//!   and load bounding box
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use u_pallet::layer::{all_descriptors, evaluate_candidates};
//! use u_pallet::solution::{PalletAnalysis, PalletSolution};
//! use u_pallet::{BoxDimensions, Config};
//!
//! let analysis = Arc::new(PalletAnalysis::new(1200.0, 800.0, 144.0).with_max_height(1500.0));
//! let height = 1500.0 - 144.0;
//! let layers = evaluate_candidates(
//!     BoxDimensions::new(400.0, 300.0, 200.0),
//!     analysis.pallet_footprint(),
//!     &all_descriptors(),
//!     &Config::default(),
//!     height,
//! )?;
//!
//! let best = layers.into_iter().next().expect("at least one layer fits");
//! let count = (height / best.layer_height()).floor() as usize;
//! let mut solution = PalletSolution::new("best", best).with_analysis(analysis)?;
//! for i in 0..count {
//!     solution.add_layer(i % 2 == 1, false);
//! }
//! assert!(solution.pallet_height()? <= 1500.0);
//! # Ok::<(), u_pallet::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `layer` (default): layer tiling patterns
//! - `solution` (default): pallet solutions
//! - `serde`: Serialization support

/// Core types and abstractions.
pub use u_pallet_core as core;

/// Layer tiling patterns.
#[cfg(feature = "layer")]
pub use u_pallet_layer as layer;

/// Pallet solutions.
#[cfg(feature = "solution")]
pub use u_pallet_solution as solution;

// Re-export commonly used types at root level
pub use u_pallet_core::{Axis, BoxDimensions, BoxPosition, Config, ContainerFootprint, Error, Result};
