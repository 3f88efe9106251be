//! Shared typed models used across the parser, builder, and matcher layers.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// 1. MissingField
// ---------------------------------------------------------------------------

/// One of the five structural fields a descriptor must yield to count as
/// complete. Serializes as the Russian label the admin screens print.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingField {
    #[serde(rename = "Модель")]
    Model,
    #[serde(rename = "Годы")]
    Years,
    #[serde(rename = "Объем")]
    Volume,
    #[serde(rename = "Клапаны")]
    Valves,
    #[serde(rename = "Двигатель")]
    Engine,
}

impl MissingField {
    pub fn label(&self) -> &'static str {
        match self {
            MissingField::Model => "Модель",
            MissingField::Years => "Годы",
            MissingField::Volume => "Объем",
            MissingField::Valves => "Клапаны",
            MissingField::Engine => "Двигатель",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// 2. VehicleSignature
// ---------------------------------------------------------------------------

/// Structured result of parsing one raw compatibility descriptor.
///
/// Parsing never fails: fields that could not be extracted stay empty and
/// are listed in `missing`. An incomplete signature is a regular value the
/// builder drops and the import preview shows to a human, not an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleSignature {
    /// Canonical capitalized model name with optional generation suffix
    /// (`"Logan 2"`, `"Duster"`), or empty.
    pub model_name: String,
    /// `"<start>-<end>"`, open ranges normalized to `"<start>-н.в."`, or
    /// empty.
    pub year_range: String,
    /// Displacement token such as `"1.6"`, or empty.
    pub volume: String,
    /// `"8V"` / `"16V"`, or empty.
    pub valves: String,
    /// Manufacturer engine code such as `"K4M"`, or empty.
    pub engine: String,
    /// Horsepower annotation normalized to `"<n> л.с."`. Informational
    /// only; never counts toward completeness.
    pub power: Option<String>,
    /// Required fields that could not be extracted, in the fixed report
    /// order model, years, volume, valves, engine.
    pub missing: Vec<MissingField>,
    /// True iff `missing` is empty.
    pub is_complete: bool,
    /// `"<model> | <years> | <volume> <valves> <engine>"`, joined verbatim
    /// even when fields are empty. Deduplication key for the builder.
    pub canonical_key: String,
}

impl VehicleSignature {
    /// Modification node name: `volume valves engine` with absent parts
    /// filtered out.
    pub fn modification_name(&self) -> String {
        [
            self.volume.as_str(),
            self.valves.as_str(),
            self.engine.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

// ---------------------------------------------------------------------------
// 3. DescriptorPreview
// ---------------------------------------------------------------------------

/// Per-row report for bulk-import screens: which structural fields a raw
/// descriptor is missing, before the row is accepted into the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DescriptorPreview {
    pub raw: String,
    pub missing: Vec<MissingField>,
    pub is_complete: bool,
}

// ---------------------------------------------------------------------------
// 4. Vehicle hierarchy nodes
// ---------------------------------------------------------------------------

/// Leaf of the vehicle tree: one engine variant within a generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleModification {
    /// `"1.6 16V K4M"` style composite, unique within its generation.
    pub name: String,
    /// Bare engine code (`"K4M"`); feeds the matcher's fallback path.
    pub engine_code: String,
}

/// Production-year group within a model, named by its year range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleGeneration {
    /// `"2010-2015"` or `"2015-н.в."`, unique within its model.
    pub name: String,
    pub modifications: Vec<VehicleModification>,
}

/// Root node of the vehicle tree. Identity is name-based only; the tree is
/// rebuilt fresh on every builder invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleModel {
    pub name: String,
    pub generations: Vec<VehicleGeneration>,
}

// ---------------------------------------------------------------------------
// 5. SelectedVehicle
// ---------------------------------------------------------------------------

/// The flat (model, generation, modification) triple a caller holds after
/// picking a vehicle from the tree, plus the modification's engine code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectedVehicle {
    pub model: String,
    pub generation: String,
    pub modification: String,
    pub engine_code: String,
}

impl SelectedVehicle {
    /// Build a selection from tree nodes, copying the names verbatim so the
    /// matcher's strict comparison cannot drift from the tree.
    pub fn from_nodes(
        model: &VehicleModel,
        generation: &VehicleGeneration,
        modification: &VehicleModification,
    ) -> Self {
        Self {
            model: model.name.clone(),
            generation: generation.name.clone(),
            modification: modification.name.clone(),
            engine_code: modification.engine_code.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
