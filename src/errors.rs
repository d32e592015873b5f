use thiserror::Error;

/// Errors surfaced by the health model and its wire mapping.
#[derive(Debug, Error)]
pub enum OpsError {
    /// Raised by `build()` (and the builder constructor) when required
    /// fields are missing. Carries every missing field, not just the first.
    #[error("could not build health model, missing fields: {}", .missing.join(","))]
    InvalidConfiguration { missing: Vec<String> },

    /// Raised when `ready()` is called on a model that never received a
    /// readiness predicate. Nothing validates predicate presence at build
    /// time, so this is the explicit failure instead of a silent default.
    #[error("no readiness predicate was configured")]
    NotConfigured,

    /// Raised by the response mapper on a health status it has no wire
    /// representation for. Unreachable while the status enum stays closed.
    #[error("health status not supported: {0}")]
    UnsupportedValue(String),
}

impl OpsError {
    pub(crate) fn invalid_configuration(missing: &[&str]) -> Self {
        OpsError::InvalidConfiguration {
            missing: missing.iter().map(|field| field.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configuration_joins_fields_with_commas() {
        let err = OpsError::invalid_configuration(&["owners", "links"]);
        assert_eq!(
            err.to_string(),
            "could not build health model, missing fields: owners,links"
        );
    }
}
