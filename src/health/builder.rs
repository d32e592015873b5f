use super::model::HealthModel;
use super::models::{Check, Link, Owner, Readiness};
use crate::errors::OpsError;

/// Accumulates health model configuration and validates it on `build()`.
///
/// The builder is consumed by every call, so a half-configured builder can
/// never be shared or mutated concurrently. All `with_*` collection methods
/// append and preserve order across repeated calls.
pub struct HealthModelBuilder {
    model: HealthModel,
    fail_on_build_error: bool,
}

impl std::fmt::Debug for HealthModelBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthModelBuilder")
            .field("model", &self.model)
            .field("fail_on_build_error", &self.fail_on_build_error)
            .finish()
    }
}

impl HealthModelBuilder {
    /// `name` and `description` must be non-empty after trimming. With
    /// `fail_on_build_error` set, `build()` fails on missing fields;
    /// otherwise it warns and returns the partially configured model.
    pub fn new(
        name: &str,
        description: &str,
        fail_on_build_error: bool,
    ) -> Result<Self, OpsError> {
        let mut missing = Vec::new();
        if name.trim().is_empty() {
            missing.push("name");
        }
        if description.trim().is_empty() {
            missing.push("description");
        }
        if !missing.is_empty() {
            return Err(OpsError::invalid_configuration(&missing));
        }

        Ok(Self {
            model: HealthModel::bare(name, description),
            fail_on_build_error,
        })
    }

    /// Sets the revision of the running build, typically a git hash or tag.
    /// Overwrites any previously set revision.
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.model.revision = revision.into();
        self
    }

    pub fn with_owners(mut self, owners: impl IntoIterator<Item = Owner>) -> Self {
        self.model.owners.extend(owners);
        self
    }

    pub fn with_links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        self.model.links.extend(links);
        self
    }

    pub fn with_checks(mut self, checks: impl IntoIterator<Item = Box<dyn Check>>) -> Self {
        self.model.checks.extend(checks);
        self
    }

    pub fn with_check(mut self, check: impl Check + 'static) -> Self {
        self.model.checks.push(Box::new(check));
        self
    }

    /// Sets the readiness predicate, overwriting any previous one.
    pub fn with_ready_func(
        mut self,
        ready: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Self {
        self.model.readiness = Some(Readiness::Custom(Box::new(ready)));
        self
    }

    pub fn always_ready(mut self) -> Self {
        self.model.readiness = Some(Readiness::Always);
        self
    }

    pub fn never_ready(mut self) -> Self {
        self.model.readiness = Some(Readiness::Never);
        self
    }

    /// Derives readiness from the health checks: only an `Unhealthy`
    /// aggregate answers not ready.
    pub fn ready_use_health_checks(mut self) -> Self {
        self.model.readiness = Some(Readiness::FromHealthChecks);
        self
    }

    /// Validates the accumulated configuration and produces the model.
    ///
    /// Every violated field is collected, not just the first. Note that no
    /// readiness predicate is validated or defaulted here; `ready()` on a
    /// model without one fails with [`OpsError::NotConfigured`].
    pub fn build(self) -> Result<HealthModel, OpsError> {
        let mut missing = Vec::new();
        if self.model.owners.is_empty() {
            missing.push("owners");
        }
        if self.model.checks.is_empty() {
            missing.push("checks");
        }
        if self.model.links.is_empty() {
            missing.push("links");
        }
        if self.model.name.trim().is_empty() {
            missing.push("name");
        }
        if self.model.description.trim().is_empty() {
            missing.push("description");
        }
        if self.model.revision.trim().is_empty() {
            missing.push("revision");
        }

        if missing.is_empty() {
            return Ok(self.model);
        }

        if self.fail_on_build_error {
            return Err(OpsError::invalid_configuration(&missing));
        }

        tracing::warn!(
            "health model built with unset fields: {}",
            missing.join(",")
        );
        Ok(self.model)
    }
}
