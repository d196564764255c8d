//! Canonical header override spec.

use std::collections::BTreeMap;

use serde::Serialize;

/// Three-phase header mutation plan for one relay call.
///
/// Values already have variables substituted. Names are kept as configured;
/// they are canonicalized when the spec is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderOverrideSpec {
    /// Headers set unconditionally.
    #[serde(rename = "override")]
    pub overrides: BTreeMap<String, String>,
    /// Headers set only when absent or empty.
    pub fill: BTreeMap<String, String>,
    /// Headers deleted before fill and override run.
    pub remove: Vec<String>,
}

impl HeaderOverrideSpec {
    /// Spec with only unconditional overrides (legacy configs).
    pub fn from_overrides(overrides: BTreeMap<String, String>) -> Self {
        Self {
            overrides,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty() && self.fill.is_empty() && self.remove.is_empty()
    }
}
