use super::models::{
    AboutInfo, Check, CheckOutcome, HealthInfo, HealthStatus, Link, Owner, Readiness,
};
use crate::errors::OpsError;

/// The application health model. Built once by [`HealthModelBuilder`], then
/// shared read-only across request workers for the process lifetime; only
/// the readiness predicate's *result* may vary between calls.
///
/// [`HealthModelBuilder`]: super::HealthModelBuilder
pub struct HealthModel {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) revision: String,
    pub(crate) owners: Vec<Owner>,
    pub(crate) links: Vec<Link>,
    pub(crate) checks: Vec<Box<dyn Check>>,
    pub(crate) readiness: Option<Readiness>,
}

impl std::fmt::Debug for HealthModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthModel")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("revision", &self.revision)
            .field("owners", &self.owners)
            .field("links", &self.links)
            .field(
                "checks",
                &self.checks.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("readiness", &self.readiness)
            .finish()
    }
}

impl HealthModel {
    pub(crate) fn bare(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            revision: String::new(),
            owners: Vec::new(),
            links: Vec::new(),
            checks: Vec::new(),
            readiness: None,
        }
    }

    /// Whether the application should receive traffic.
    ///
    /// Fails with [`OpsError::NotConfigured`] if no readiness predicate was
    /// ever configured. `FromHealthChecks` re-runs every check on each call.
    pub fn ready(&self) -> Result<bool, OpsError> {
        let readiness = self.readiness.as_ref().ok_or(OpsError::NotConfigured)?;
        Ok(match readiness {
            Readiness::Always => true,
            Readiness::Never => false,
            Readiness::FromHealthChecks => self.health().health != HealthStatus::Unhealthy,
            Readiness::Custom(predicate) => predicate(),
        })
    }

    /// Runs every check once, in registration order, sequentially and
    /// synchronously. No timeout is applied: a slow check stalls the whole
    /// aggregation.
    #[tracing::instrument(name = "Run health checks", skip_all, fields(application = %self.name))]
    pub fn health(&self) -> HealthInfo {
        let check_results: Vec<CheckOutcome> = self
            .checks
            .iter()
            .map(|check| CheckOutcome {
                name: check.name().to_string(),
                result: check.run(),
            })
            .collect();

        // zero checks aggregate to Unhealthy: absence of evidence is not
        // evidence of health
        let health = check_results
            .iter()
            .map(|outcome| outcome.result.status)
            .max()
            .unwrap_or(HealthStatus::Unhealthy);

        HealthInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            health,
            check_results,
        }
    }

    /// Static identity and ownership metadata. Pure projection.
    pub fn about(&self) -> AboutInfo {
        AboutInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            owners: self.owners.clone(),
            links: self.links.clone(),
            revision: self.revision.clone(),
        }
    }
}
