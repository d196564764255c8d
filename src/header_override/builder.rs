//! Header override spec construction.
//!
//! # Responsibilities
//! - Detect legacy vs structured config shape
//! - Validate every section into string-typed maps and lists
//! - Substitute request variables into values
//!
//! # Design Decisions
//! - Fail fast on the first invalid entry; no partial spec is returned
//! - Pure function of (raw config, request context)

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::header_override::error::{HeaderOverrideError, HeaderOverrideResult};
use crate::header_override::shape::{
    OverrideShape, FILL_SECTION, OVERRIDE_SECTION, REMOVE_SECTION,
};
use crate::header_override::spec::HeaderOverrideSpec;
use crate::header_override::variables::replace_header_variables;
use crate::relay::RequestContext;

/// Build the header override spec for a relay call.
///
/// `raw` is the channel's untyped override block. `None`, `null` and `{}` all
/// produce an empty spec.
pub fn build_header_override_spec<C>(
    raw: Option<&Value>,
    ctx: &C,
) -> HeaderOverrideResult<HeaderOverrideSpec>
where
    C: RequestContext + ?Sized,
{
    let raw = match raw {
        None | Some(Value::Null) => return Ok(HeaderOverrideSpec::default()),
        Some(Value::Object(map)) if map.is_empty() => return Ok(HeaderOverrideSpec::default()),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(HeaderOverrideError::invalid(
                "root",
                format!("expected a map, got {}", type_name(other)),
            ))
        }
    };

    match OverrideShape::detect(raw) {
        OverrideShape::Structured {
            overrides,
            fill,
            remove,
        } => {
            tracing::debug!("Parsing structured header override");
            Ok(HeaderOverrideSpec {
                overrides: parse_header_map(OVERRIDE_SECTION, overrides, ctx)?,
                fill: parse_header_map(FILL_SECTION, fill, ctx)?,
                remove: parse_remove_list(remove)?,
            })
        }
        OverrideShape::Legacy(map) => {
            tracing::debug!(headers = map.len(), "Parsing legacy header override");
            Ok(HeaderOverrideSpec::from_overrides(parse_map_entries(
                OVERRIDE_SECTION,
                map,
                ctx,
            )?))
        }
    }
}

fn parse_header_map<C>(
    section: &'static str,
    raw: Option<&Value>,
    ctx: &C,
) -> HeaderOverrideResult<BTreeMap<String, String>>
where
    C: RequestContext + ?Sized,
{
    match raw {
        None | Some(Value::Null) => Ok(BTreeMap::new()),
        Some(Value::Object(map)) => parse_map_entries(section, map, ctx),
        Some(other) => Err(HeaderOverrideError::invalid(
            section,
            format!("expected a map, got {}", type_name(other)),
        )),
    }
}

fn parse_map_entries<C>(
    section: &'static str,
    map: &Map<String, Value>,
    ctx: &C,
) -> HeaderOverrideResult<BTreeMap<String, String>>
where
    C: RequestContext + ?Sized,
{
    map.iter()
        .map(|(name, value)| match value {
            Value::String(s) => Ok((name.clone(), replace_header_variables(s, ctx))),
            other => Err(HeaderOverrideError::invalid(
                section,
                format!("value for {:?} must be a string, got {}", name, type_name(other)),
            )),
        })
        .collect()
}

fn parse_remove_list(raw: Option<&Value>) -> HeaderOverrideResult<Vec<String>> {
    match raw {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(HeaderOverrideError::invalid(
                    REMOVE_SECTION,
                    format!("entry {} must be a string, got {}", i, type_name(other)),
                )),
            })
            .collect(),
        Some(other) => Err(HeaderOverrideError::invalid(
            REMOVE_SECTION,
            format!("expected a list, got {}", type_name(other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}
