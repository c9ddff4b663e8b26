//! Structural comparison of two extracted App records.
//!
//! Scalar attributes are paired up raw, with no normalization, so case and
//! whitespace differences stay visible to the renderer. Collection attributes
//! are reduced to sets and split three ways: common, only-in-left,
//! only-in-right. Parameter maps are compared by key only; values are never
//! diffed. The `methods` sequence is set-collapsed like every other
//! collection, so a method declared twice counts once here even though the
//! extractor preserves the duplicate.

use crate::scan::{AppMetadata, Lookup};
use std::collections::BTreeSet;

/// Three-way partition of two string collections, duplicates and order
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetDiff {
    pub common: BTreeSet<String>,
    pub only_in_left: BTreeSet<String>,
    pub only_in_right: BTreeSet<String>,
}

impl SetDiff {
    /// Partitions two ordered sequences into common / left-only / right-only
    /// sets.
    #[must_use]
    pub fn partition<'a, L, R>(left: L, right: R) -> Self
    where
        L: IntoIterator<Item = &'a String>,
        R: IntoIterator<Item = &'a String>,
    {
        let left: BTreeSet<String> = left.into_iter().cloned().collect();
        let right: BTreeSet<String> = right.into_iter().cloned().collect();

        Self {
            common: left.intersection(&right).cloned().collect(),
            only_in_left: left.difference(&right).cloned().collect(),
            only_in_right: right.difference(&left).cloned().collect(),
        }
    }

    /// `true` when both sides hold exactly the same set of values.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.only_in_left.is_empty() && self.only_in_right.is_empty()
    }
}

/// Per-field differences between two extracted records. Derived on demand,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Class names of the two sides, for report headings.
    pub left_app: String,
    pub right_app: String,

    // Scalar pairs, raw values as extracted.
    pub name: (Option<String>, Option<String>),
    pub analysis_category: (Option<String>, Option<String>),
    pub process_mode: (Option<String>, Option<String>),
    pub ezrun_app: (Option<String>, Option<String>),

    pub required_columns: SetDiff,
    pub required_params: SetDiff,
    pub modules: SetDiff,
    pub inherit_columns: SetDiff,
    pub inherit_tags: SetDiff,

    /// Parameter keys only; values are not compared.
    pub params: SetDiff,

    pub methods: SetDiff,
}

/// Computes the per-field differences between two valid records.
///
/// Infallible: once both sides exist there is nothing left to go wrong.
#[must_use]
pub fn compare(left: &AppMetadata, right: &AppMetadata) -> Comparison {
    Comparison {
        left_app: left.class_name.clone(),
        right_app: right.class_name.clone(),
        name: (left.name.clone(), right.name.clone()),
        analysis_category: (left.analysis_category.clone(), right.analysis_category.clone()),
        process_mode: (left.process_mode.clone(), right.process_mode.clone()),
        ezrun_app: (left.ezrun_app.clone(), right.ezrun_app.clone()),
        required_columns: SetDiff::partition(&left.required_columns, &right.required_columns),
        required_params: SetDiff::partition(&left.required_params, &right.required_params),
        modules: SetDiff::partition(&left.modules, &right.modules),
        inherit_columns: SetDiff::partition(&left.inherit_columns, &right.inherit_columns),
        inherit_tags: SetDiff::partition(&left.inherit_tags, &right.inherit_tags),
        params: SetDiff::partition(left.params.keys(), right.params.keys()),
        methods: SetDiff::partition(&left.methods, &right.methods),
    }
}

/// Compares two library lookups, yielding `None` when either side is absent.
///
/// Absence is symmetric: it doesn't matter which side failed to resolve, the
/// pair is incomparable either way.
#[must_use]
pub fn try_compare(left: &Lookup<AppMetadata>, right: &Lookup<AppMetadata>) -> Option<Comparison> {
    match (left, right) {
        (Lookup::Found(left), Lookup::Found(right)) => Some(compare(left, right)),
        _ => None,
    }
}
