//! Vehicle tree construction: parse every catalog descriptor, drop the
//! incomplete ones, and fold the survivors into the sorted
//! model → generation → modification hierarchy.
//!
//! No input can make the build fail. Malformed entries are excluded and
//! visible only through the drop sink and [`BuildStats`]; repeated builds
//! over the same input produce identical trees.

use std::collections::HashSet;
use std::sync::LazyLock;

use indexmap::IndexMap;
use rayon::prelude::*;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace};

use crate::models::{
    MissingField, VehicleGeneration, VehicleModel, VehicleModification, VehicleSignature,
};
use crate::parser::signature::parse_descriptor;

static LEADING_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]{4})").unwrap());

static LEADING_VOLUME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+(?:\.[0-9]+)?)").unwrap());

/// Counters from one tree build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    pub descriptors_seen: usize,
    pub incomplete_dropped: usize,
    pub duplicates_collapsed: usize,
    pub models: usize,
    pub generations: usize,
    pub modifications: usize,
}

/// Build the vehicle tree from raw descriptors, silently excluding
/// incomplete ones.
pub fn build_tree<'a, I>(descriptors: I) -> Vec<VehicleModel>
where
    I: IntoIterator<Item = &'a str>,
{
    let (tree, _) = build_tree_report(descriptors, |_, _| {});
    tree
}

/// Build the vehicle tree and report every dropped descriptor to `on_drop`
/// along with its missing fields; returns the tree and build counters.
pub fn build_tree_report<'a, I, F>(descriptors: I, on_drop: F) -> (Vec<VehicleModel>, BuildStats)
where
    I: IntoIterator<Item = &'a str>,
    F: FnMut(&str, &[MissingField]),
{
    let pairs = descriptors
        .into_iter()
        .map(|raw| (raw, parse_descriptor(raw)));
    fold_signatures(pairs, on_drop)
}

/// Build the vehicle tree with a Rayon-parallel parse pass. The fold stays
/// single-threaded, so the output is identical to [`build_tree`].
pub fn build_tree_parallel(descriptors: &[String], workers: usize) -> Vec<VehicleModel> {
    if descriptors.is_empty() {
        return vec![];
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .build();

    let parsed: Vec<VehicleSignature> = match pool {
        Ok(pool) => pool.install(|| {
            descriptors
                .par_iter()
                .map(|raw| parse_descriptor(raw))
                .collect()
        }),
        Err(_) => {
            // Fallback to sequential
            descriptors
                .iter()
                .map(|raw| parse_descriptor(raw))
                .collect()
        }
    };

    let pairs = descriptors.iter().map(String::as_str).zip(parsed);
    let (tree, _) = fold_signatures(pairs, |_, _| {});
    tree
}

// ---------------------------------------------------------------------------
// Fold and ordering
// ---------------------------------------------------------------------------

fn fold_signatures<'a, I, F>(pairs: I, mut on_drop: F) -> (Vec<VehicleModel>, BuildStats)
where
    I: IntoIterator<Item = (&'a str, VehicleSignature)>,
    F: FnMut(&str, &[MissingField]),
{
    let mut models: IndexMap<String, VehicleModel> = IndexMap::new();
    let mut seen_keys: HashSet<String> = HashSet::new();
    let mut stats = BuildStats::default();

    for (raw, sig) in pairs {
        stats.descriptors_seen += 1;

        if !sig.is_complete {
            stats.incomplete_dropped += 1;
            trace!("Dropped incomplete descriptor: {}", raw);
            on_drop(raw, &sig.missing);
            continue;
        }
        // First spelling of a vehicle wins; later duplicates collapse onto
        // the same canonical key.
        if !seen_keys.insert(sig.canonical_key.clone()) {
            stats.duplicates_collapsed += 1;
            continue;
        }

        let model = models
            .entry(sig.model_name.clone())
            .or_insert_with(|| VehicleModel {
                name: sig.model_name.clone(),
                generations: Vec::new(),
            });

        let gen_idx = match model
            .generations
            .iter()
            .position(|g| g.name == sig.year_range)
        {
            Some(idx) => idx,
            None => {
                model.generations.push(VehicleGeneration {
                    name: sig.year_range.clone(),
                    modifications: Vec::new(),
                });
                model.generations.len() - 1
            }
        };
        let generation = &mut model.generations[gen_idx];

        let mod_name = sig.modification_name();
        if !generation.modifications.iter().any(|m| m.name == mod_name) {
            generation.modifications.push(VehicleModification {
                name: mod_name,
                engine_code: sig.engine.clone(),
            });
        }
    }

    let mut tree: Vec<VehicleModel> = models.into_values().collect();
    tree.sort_by(|a, b| a.name.cmp(&b.name));
    for model in &mut tree {
        // Newest generation first.
        model
            .generations
            .sort_by(|a, b| leading_year(&b.name).cmp(&leading_year(&a.name)));
        // Largest displacement first.
        for generation in &mut model.generations {
            generation.modifications.sort_by(|a, b| {
                leading_volume(&b.name)
                    .partial_cmp(&leading_volume(&a.name))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
    }

    stats.models = tree.len();
    stats.generations = tree.iter().map(|m| m.generations.len()).sum();
    stats.modifications = tree
        .iter()
        .flat_map(|m| &m.generations)
        .map(|g| g.modifications.len())
        .sum();

    debug!(
        "Built vehicle tree: {} descriptors, {} incomplete dropped, {} duplicates, \
         {} models, {} generations, {} modifications",
        stats.descriptors_seen,
        stats.incomplete_dropped,
        stats.duplicates_collapsed,
        stats.models,
        stats.generations,
        stats.modifications,
    );

    (tree, stats)
}

/// Leading four-digit year of a generation name; unparseable names sort
/// as 0, therefore last.
fn leading_year(name: &str) -> i64 {
    match LEADING_YEAR_RE.captures(name) {
        Some(caps) => caps[1].parse().unwrap_or(0),
        None => 0,
    }
}

/// Leading numeric displacement of a modification name; missing or
/// non-numeric sorts as 0.
fn leading_volume(name: &str) -> f64 {
    match LEADING_VOLUME_RE.captures(name) {
        Some(caps) => caps[1].parse().unwrap_or(0.0),
        None => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
