//! # U-Pallet Solution
//!
//! Stacks a generated layer into a loaded pallet.
//!
//! A [`PalletSolution`] repeats one representative [`Layer`] over a sequence
//! of [`LayerSlot`]s and reports weights, heights, the load bounding box and
//! volume efficiency against a [`PalletAnalysis`]. [`LayerType`] groups the
//! slots by swap state.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use u_pallet_core::{Axis, BoxDimensions};
//! use u_pallet_layer::{Layer, LayerPattern, Pattern};
//! use u_pallet_solution::{PalletAnalysis, PalletSolution};
//!
//! let analysis = Arc::new(PalletAnalysis::new(120.0, 80.0, 100.0));
//! let mut layer = Layer::new(
//!     BoxDimensions::new(40.0, 20.0, 20.0),
//!     analysis.pallet_footprint(),
//!     Axis::ZPos,
//!     false,
//! );
//! LayerPattern::Column.generate(&mut layer).unwrap();
//!
//! let mut solution = PalletSolution::new("Column", layer)
//!     .with_analysis(analysis)
//!     .unwrap();
//! solution.add_layer(false, false);
//! solution.add_layer(true, false);
//! assert_eq!(solution.pack_count(), 24);
//! assert_eq!(solution.pallet_height().unwrap(), 140.0);
//! ```

pub mod analysis;
pub mod layer_type;
pub mod solution;

// Re-exports
pub use analysis::{Interlayer, PalletAnalysis};
pub use layer_type::LayerType;
pub use solution::{sort_solutions, LayerSlot, PalletSolution};
pub use u_pallet_layer::Layer;
