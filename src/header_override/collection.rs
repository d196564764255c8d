//! Header collection seam.
//!
//! The applier only needs get/set/delete by canonical name, so it works
//! against any transport's header type through this trait.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

/// Mutable header storage of an outbound request.
pub trait HeaderCollection {
    /// True when the header exists with a non-empty value.
    fn has_value(&self, name: &str) -> bool;

    /// Replace every value of `name` with `value`.
    ///
    /// Returns false when the name or value cannot be represented, in which
    /// case the collection is left unchanged.
    fn set_value(&mut self, name: &str, value: &str) -> bool;

    /// Delete every value of `name`.
    fn remove_value(&mut self, name: &str);
}

impl HeaderCollection for HeaderMap {
    fn has_value(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }

    fn set_value(&mut self, name: &str, value: &str) -> bool {
        let Ok(name) = HeaderName::from_bytes(name.as_bytes()) else {
            tracing::warn!(header = %name, "Skipping invalid header name");
            return false;
        };
        let Ok(value) = HeaderValue::from_str(value) else {
            tracing::warn!(header = %name, "Skipping header with invalid value");
            return false;
        };
        self.insert(name, value);
        true
    }

    fn remove_value(&mut self, name: &str) {
        HeaderMap::remove(self, name);
    }
}
