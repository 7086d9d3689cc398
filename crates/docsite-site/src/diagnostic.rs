//! Problems found while cross-checking a site.

use std::fmt;

use docsite_config::BrokenLinkPolicy;
use serde::Serialize;

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// One problem, located by its descriptor or sidebar key path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Where the problem is, e.g. `sidebars.tutorial[2]`.
    pub location: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.location, self.message)
    }
}

/// Collects diagnostics, applying the broken link policy.
pub(crate) struct Diagnostics {
    policy: BrokenLinkPolicy,
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub(crate) fn new(policy: BrokenLinkPolicy) -> Self {
        Self {
            policy,
            items: Vec::new(),
        }
    }

    /// Record a broken reference; severity follows the policy.
    pub(crate) fn broken(&mut self, location: &str, message: String) {
        let severity = match self.policy {
            BrokenLinkPolicy::Throw => Severity::Error,
            BrokenLinkPolicy::Warn => Severity::Warning,
            BrokenLinkPolicy::Ignore => return,
        };
        self.push(severity, location, message);
    }

    /// Record an error regardless of policy.
    pub(crate) fn error(&mut self, location: &str, message: String) {
        self.push(Severity::Error, location, message);
    }

    fn push(&mut self, severity: Severity, location: &str, message: String) {
        if severity == Severity::Warning {
            tracing::warn!(location, "{message}");
        }
        self.items.push(Diagnostic {
            severity,
            location: location.to_owned(),
            message,
        });
    }

    pub(crate) fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.severity == Severity::Error)
    }

    pub(crate) fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
