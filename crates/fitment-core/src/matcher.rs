//! Fitment decisions: whether a catalog item fits the selected vehicle,
//! and resolution of saved selections against a freshly built tree.

use crate::errors::{FitmentError, FitmentResult};
use crate::models::{SelectedVehicle, VehicleModel};
use crate::parser::signature::parse_descriptor;

/// Decide whether a catalog item fits the selected vehicle.
///
/// Two independent tests, short-circuit OR:
/// - strict: some descriptor parses complete and its model, year range,
///   and modification name all equal the selection;
/// - fallback: the selection's engine code appears verbatim in the item's
///   bare engine-code list (parts registered against an engine family).
///
/// An item with no compatibility data never matches.
pub fn matches_vehicle(
    selected: &SelectedVehicle,
    descriptors: &[String],
    engine_codes: &[String],
) -> bool {
    let strict = descriptors.iter().any(|raw| {
        let sig = parse_descriptor(raw);
        sig.is_complete
            && sig.model_name == selected.model
            && sig.year_range == selected.generation
            && sig.modification_name() == selected.modification
    });
    if strict {
        return true;
    }

    engine_codes
        .iter()
        .any(|code| *code == selected.engine_code)
}

/// Walk a built tree by names and produce the selection, failing at the
/// first level whose name does not exist. Guards callers restoring a saved
/// selection against a tree that has since been rebuilt.
pub fn resolve_selection(
    tree: &[VehicleModel],
    model: &str,
    generation: &str,
    modification: &str,
) -> FitmentResult<SelectedVehicle> {
    let model_node = tree
        .iter()
        .find(|m| m.name == model)
        .ok_or_else(|| FitmentError::UnknownModel(model.to_string()))?;
    let generation_node = model_node
        .generations
        .iter()
        .find(|g| g.name == generation)
        .ok_or_else(|| FitmentError::UnknownGeneration(generation.to_string()))?;
    let modification_node = generation_node
        .modifications
        .iter()
        .find(|m| m.name == modification)
        .ok_or_else(|| FitmentError::UnknownModification(modification.to_string()))?;

    Ok(SelectedVehicle::from_nodes(
        model_node,
        generation_node,
        modification_node,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
