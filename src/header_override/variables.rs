//! Variable substitution for header values.
//!
//! Only `{api_key}` is recognized. Anything else in braces is kept as-is.

use crate::relay::RequestContext;

/// Token replaced with the request's API key.
pub const API_KEY_VARIABLE: &str = "{api_key}";

/// Replace every `{api_key}` in `value` with the context's API key.
pub fn replace_header_variables<C>(value: &str, ctx: &C) -> String
where
    C: RequestContext + ?Sized,
{
    if value.contains(API_KEY_VARIABLE) {
        value.replace(API_KEY_VARIABLE, ctx.api_key())
    } else {
        value.to_string()
    }
}
