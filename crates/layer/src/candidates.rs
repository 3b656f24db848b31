//! Parallel evaluation of (pattern, stacking axis) candidates.

use rayon::prelude::*;
use u_pallet_core::{Axis, BoxDimensions, Config, ContainerFootprint, Error, Result};

use crate::comparer::LayerComparer;
use crate::layer::{Layer, PatternDescriptor};
use crate::pattern::{LayerPattern, Pattern};

/// Generates one layer per descriptor and ranks the feasible ones for
/// `height`.
///
/// Candidates are generated in parallel; each works on its own [`Layer`].
/// Infeasible candidates are dropped. The result is ordered best first by
/// [`LayerComparer`]; candidates ranking equal keep the descriptor order.
///
/// # Errors
///
/// Fails on invalid box, container or configuration values, and with
/// [`Error::ConfigError`] when a descriptor names an unknown pattern.
pub fn evaluate_candidates(
    box_dims: BoxDimensions,
    container: ContainerFootprint,
    descriptors: &[PatternDescriptor],
    config: &Config,
    height: f64,
) -> Result<Vec<Layer>> {
    box_dims.validate()?;
    container.validate()?;
    config.validate()?;

    let patterns = descriptors
        .iter()
        .map(|d| {
            LayerPattern::from_name(&d.pattern_name)
                .map(|p| (p, d.stacking_axis))
                .ok_or_else(|| {
                    Error::ConfigError(format!("Unknown pattern '{}'", d.pattern_name))
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let generated: Vec<Option<Layer>> = patterns
        .par_iter()
        .map(|&(pattern, axis)| -> Result<Option<Layer>> {
            let mut layer =
                Layer::new(box_dims, container, axis, false).with_config(*config);
            let feasible = pattern.generate(&mut layer)?;
            Ok(feasible.then_some(layer))
        })
        .collect::<Result<_>>()?;

    let mut layers: Vec<Layer> = generated.into_iter().flatten().collect();
    LayerComparer::new(height).sort(&mut layers);

    log::debug!(
        "Evaluated {} candidates: {} feasible, best {}",
        descriptors.len(),
        layers.len(),
        layers
            .first()
            .map(|l| format!(
                "'{}' on {} ({} boxes in {:.1})",
                l.pattern_name(),
                l.stacking_axis(),
                l.count_in_height(height),
                height
            ))
            .unwrap_or_else(|| "none".to_string())
    );
    Ok(layers)
}

/// Descriptors for every pattern on every stacking axis.
pub fn all_descriptors() -> Vec<PatternDescriptor> {
    LayerPattern::ALL
        .iter()
        .flat_map(|pattern| {
            Axis::ALL.into_iter().map(|axis| PatternDescriptor {
                pattern_name: pattern.name().to_string(),
                stacking_axis: axis,
            })
        })
        .collect()
}
