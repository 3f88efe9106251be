//! Fitment core library — vehicle-fitment resolution for an auto-parts
//! catalog.
//!
//! This crate turns free-text, inconsistently formatted compatibility
//! descriptors (mixed Cyrillic/Latin, punctuation, abbreviations) into
//! structured vehicle signatures, aggregates the signatures across a whole
//! catalog into a sorted model → generation → modification tree, and
//! decides at query time whether a part fits a user-selected vehicle. All
//! computation is pure and in-memory; the catalog store and the selection
//! UI live elsewhere and call in through the types re-exported here.

pub mod errors;
pub mod hierarchy;
pub mod matcher;
pub mod models;
pub mod parser;

// ---------------------------------------------------------------------------
// Public surface
// ---------------------------------------------------------------------------

pub use errors::{FitmentError, FitmentResult};
pub use hierarchy::{build_tree, build_tree_parallel, build_tree_report, BuildStats};
pub use matcher::{matches_vehicle, resolve_selection};
pub use models::{
    DescriptorPreview, MissingField, SelectedVehicle, VehicleGeneration, VehicleModel,
    VehicleModification, VehicleSignature,
};
pub use parser::normalize::{normalize_descriptor, MAX_DESCRIPTOR_LEN};
pub use parser::signature::{format_descriptor, parse_descriptor, preview_descriptors};
