//! Header override application.
//!
//! # Responsibilities
//! - Mutate an outbound header collection according to a spec
//!
//! # Design Decisions
//! - Phases run in a fixed order: remove, then fill, then override.
//!   Override therefore wins over everything, and fill never replaces a
//!   header that already has a value.
//! - Never fails: empty or unrepresentable names and values are skipped

use crate::header_override::canonical::canonical_header_name;
use crate::header_override::collection::HeaderCollection;
use crate::header_override::spec::HeaderOverrideSpec;

/// Apply `spec` to `headers` in place. `None` leaves the headers untouched.
pub fn apply_header_override<H>(headers: &mut H, spec: Option<&HeaderOverrideSpec>)
where
    H: HeaderCollection + ?Sized,
{
    let Some(spec) = spec else {
        return;
    };

    // 1. Remove
    for name in &spec.remove {
        if let Some(canonical) = canonical_header_name(name) {
            headers.remove_value(&canonical);
        }
    }

    // 2. Fill (only absent or empty headers)
    for (name, value) in &spec.fill {
        let Some(canonical) = canonical_header_name(name) else {
            continue;
        };
        if !headers.has_value(&canonical) {
            headers.set_value(&canonical, value);
        }
    }

    // 3. Override
    for (name, value) in &spec.overrides {
        if let Some(canonical) = canonical_header_name(name) {
            headers.set_value(&canonical, value);
        }
    }

    tracing::trace!(
        removed = spec.remove.len(),
        filled = spec.fill.len(),
        overridden = spec.overrides.len(),
        "Header override applied"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue};
    use std::collections::BTreeMap;

    fn headers(entries: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in entries {
            map.insert(*k, HeaderValue::from_static(*v));
        }
        map
    }

    fn entries(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn get<'a>(map: &'a HeaderMap, name: &str) -> Option<&'a str> {
        map.get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_empty_spec_leaves_headers_untouched() {
        let original = headers(&[("x-foo", "1"), ("authorization", "Bearer a")]);

        let mut map = original.clone();
        apply_header_override(&mut map, None);
        assert_eq!(map, original);

        apply_header_override(&mut map, Some(&HeaderOverrideSpec::default()));
        assert_eq!(map, original);
    }

    #[test]
    fn test_override_wins_over_fill_and_remove() {
        let spec = HeaderOverrideSpec {
            overrides: entries(&[("X-Foo", "o")]),
            fill: entries(&[("X-Foo", "f")]),
            remove: vec!["X-Foo".to_string()],
        };
        let mut map = headers(&[("x-foo", "existing")]);
        apply_header_override(&mut map, Some(&spec));
        assert_eq!(get(&map, "X-Foo"), Some("o"));
    }

    #[test]
    fn test_fill_only_if_absent() {
        let spec = HeaderOverrideSpec {
            fill: entries(&[("X-Bar", "f")]),
            ..Default::default()
        };

        let mut present = headers(&[("x-bar", "existing")]);
        apply_header_override(&mut present, Some(&spec));
        assert_eq!(get(&present, "X-Bar"), Some("existing"));

        let mut absent = HeaderMap::new();
        apply_header_override(&mut absent, Some(&spec));
        assert_eq!(get(&absent, "X-Bar"), Some("f"));

        let mut empty = headers(&[("x-bar", "")]);
        apply_header_override(&mut empty, Some(&spec));
        assert_eq!(get(&empty, "X-Bar"), Some("f"));
    }

    #[test]
    fn test_remove_then_fill_restores_value() {
        let spec = HeaderOverrideSpec {
            fill: entries(&[("User-Agent", "relay")]),
            remove: vec!["user-agent".to_string()],
            ..Default::default()
        };
        let mut map = headers(&[("user-agent", "curl/8.0")]);
        apply_header_override(&mut map, Some(&spec));
        assert_eq!(get(&map, "User-Agent"), Some("relay"));
    }

    #[test]
    fn test_remove_without_replacement() {
        let spec = HeaderOverrideSpec {
            remove: vec!["X-Baz".to_string()],
            ..Default::default()
        };
        let mut map = headers(&[("x-baz", "v"), ("x-keep", "k")]);
        apply_header_override(&mut map, Some(&spec));
        assert!(map.get("x-baz").is_none());
        assert_eq!(get(&map, "X-Keep"), Some("k"));
    }

    #[test]
    fn test_names_are_canonicalized() {
        for name in ["x-foo", " X-Foo ", "X-FOO"] {
            let mut map = headers(&[("x-foo", "old")]);
            let spec = HeaderOverrideSpec {
                remove: vec![name.to_string()],
                ..Default::default()
            };
            apply_header_override(&mut map, Some(&spec));
            assert!(map.is_empty(), "remove {:?}", name);

            let spec = HeaderOverrideSpec::from_overrides(entries(&[(name, "new")]));
            apply_header_override(&mut map, Some(&spec));
            assert_eq!(get(&map, "X-Foo"), Some("new"));
            assert_eq!(map.len(), 1);
        }
    }

    #[test]
    fn test_malformed_names_skipped() {
        let spec = HeaderOverrideSpec {
            overrides: entries(&[("  ", "x"), ("bad name", "y"), ("X-Ok", "z")]),
            fill: entries(&[("", "f")]),
            remove: vec!["   ".to_string()],
        };
        let mut map = headers(&[("x-keep", "1")]);
        apply_header_override(&mut map, Some(&spec));
        assert_eq!(map.len(), 2);
        assert_eq!(get(&map, "X-Ok"), Some("z"));
        assert_eq!(get(&map, "X-Keep"), Some("1"));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let spec = HeaderOverrideSpec {
            overrides: entries(&[("Authorization", "Bearer sk")]),
            fill: entries(&[("X-Fill", "f")]),
            remove: vec!["X-Drop".to_string()],
        };
        let mut map = headers(&[("x-drop", "1"), ("authorization", "Bearer client")]);
        apply_header_override(&mut map, Some(&spec));
        let once = map.clone();
        apply_header_override(&mut map, Some(&spec));
        assert_eq!(map, once);
    }
}
