//! `${VAR}` expansion for descriptor strings.
//!
//! - `${VAR}` is replaced with the value of VAR; an unset VAR is an error
//! - `${VAR:-fallback}` uses the fallback when VAR is unset
//!
//! Only `${...}` spans are expanded. A bare `$` (as in `/$ref`) is kept
//! verbatim, also in strings that contain `${...}` elsewhere.

use crate::ConfigError;

/// Expand environment references in `value`.
///
/// `field` is the dotted descriptor key and only appears in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let span = &rest[start..=start + len];
        expanded.push_str(&rest[..start]);
        let resolved = shellexpand::env_with_context(span, lookup).map_err(|e| {
            ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("${{{}}} not set", e.cause.0),
            }
        })?;
        expanded.push_str(&resolved);
        rest = &rest[start + len + 1..];
    }

    expanded.push_str(rest);
    Ok(expanded)
}

/// Like [`expand_env`] but passes `None` through.
pub(crate) fn expand_env_opt(
    value: Option<&str>,
    field: &str,
) -> Result<Option<String>, ConfigError> {
    value.map(|v| expand_env(v, field)).transpose()
}

/// Name of the variable that could not be resolved.
struct Unset(String);

fn lookup(var: &str) -> Result<Option<String>, Unset> {
    std::env::var(var)
        .map(Some)
        .map_err(|_| Unset(var.to_owned()))
}
