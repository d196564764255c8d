//! Shape detection for raw header override configs.
//!
//! # Design Decisions
//! - Detection happens once; everything downstream sees an `OverrideShape`
//! - A section key only marks the config as structured when it holds a
//!   container (map, list) or an explicit null. A legacy config may carry a
//!   real header named `override` with a string value.

use serde_json::{Map, Value};

pub const OVERRIDE_SECTION: &str = "override";
pub const FILL_SECTION: &str = "fill";
pub const REMOVE_SECTION: &str = "remove";

const SECTIONS: [&str; 3] = [OVERRIDE_SECTION, FILL_SECTION, REMOVE_SECTION];

/// The two accepted encodings of a channel's header override block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverrideShape<'a> {
    /// `{ "<Header-Name>": "<value>", ... }`, applied as overrides.
    Legacy(&'a Map<String, Value>),
    /// `{ "override": {...}, "fill": {...}, "remove": [...] }`.
    Structured {
        overrides: Option<&'a Value>,
        fill: Option<&'a Value>,
        remove: Option<&'a Value>,
    },
}

impl<'a> OverrideShape<'a> {
    /// Classify a raw config map.
    pub fn detect(raw: &'a Map<String, Value>) -> Self {
        let structured = SECTIONS
            .iter()
            .filter_map(|key| raw.get(*key))
            .any(is_section_container);

        if !structured {
            return Self::Legacy(raw);
        }

        let unknown: Vec<&str> = raw
            .keys()
            .map(String::as_str)
            .filter(|key| !SECTIONS.contains(key))
            .collect();
        if !unknown.is_empty() {
            tracing::debug!(keys = ?unknown, "Ignoring unknown keys in structured header override");
        }

        Self::Structured {
            overrides: raw.get(OVERRIDE_SECTION),
            fill: raw.get(FILL_SECTION),
            remove: raw.get(REMOVE_SECTION),
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured { .. })
    }
}

fn is_section_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_) | Value::Null)
}
