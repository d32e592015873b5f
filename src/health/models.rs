use std::fmt;

/// Health of a single check or of the whole application.
///
/// The ordering is significant: aggregation takes the maximum over
/// `Healthy < Degraded < Unhealthy`, so one unhealthy check taints the
/// aggregate no matter how many healthy ones sit next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Outcome of one check invocation. Produced per request, never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub status: HealthStatus,
    pub output: String,
    pub action: String,
    pub impact: String,
}

impl CheckResult {
    pub fn healthy(output: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            output: output.into(),
            action: String::new(),
            impact: String::new(),
        }
    }

    /// `action` is what an operator should do about it.
    pub fn degraded(output: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Degraded,
            output: output.into(),
            action: action.into(),
            impact: String::new(),
        }
    }

    /// `impact` describes what is broken for users while this persists.
    pub fn unhealthy(
        output: impl Into<String>,
        action: impl Into<String>,
        impact: impl Into<String>,
    ) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            output: output.into(),
            action: action.into(),
            impact: impact.into(),
        }
    }
}

/// A unit of diagnostic logic supplied by the host.
///
/// `run` must return a `CheckResult` describing any failure rather than
/// panic; the model does not guard check execution. Checks run on whatever
/// worker handles the request, hence `Send + Sync`.
pub trait Check: Send + Sync {
    /// Identity under which the result is reported on the health endpoint.
    fn name(&self) -> &str;

    fn run(&self) -> CheckResult;
}

/// A check backed by a closure, for hosts that have no state to hang a
/// dedicated type on.
pub struct FuncCheck {
    name: String,
    run: Box<dyn Fn() -> CheckResult + Send + Sync>,
}

impl FuncCheck {
    pub fn new(
        name: impl Into<String>,
        run: impl Fn() -> CheckResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            run: Box::new(run),
        }
    }
}

impl Check for FuncCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self) -> CheckResult {
        (self.run)()
    }
}

/// A person or team responsible for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub name: String,
    pub slack: String,
}

impl Owner {
    pub fn new(name: impl Into<String>, slack: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.trim().is_empty(), "owner name must not be empty");
        Self {
            name,
            slack: slack.into(),
        }
    }
}

/// A reference URL: source repo, dashboard, runbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub description: String,
}

impl Link {
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        let url = url.into();
        debug_assert!(!url.trim().is_empty(), "link url must not be empty");
        Self {
            url,
            description: description.into(),
        }
    }
}

/// How the model answers the ready endpoint.
pub enum Readiness {
    Always,
    Never,
    /// Ready unless the aggregated health is `Unhealthy`; a degraded
    /// application still takes traffic.
    FromHealthChecks,
    Custom(Box<dyn Fn() -> bool + Send + Sync>),
}

impl fmt::Debug for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Readiness::Always => write!(f, "Always"),
            Readiness::Never => write!(f, "Never"),
            Readiness::FromHealthChecks => write!(f, "FromHealthChecks"),
            Readiness::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// A check result paired with the identity of the check that produced it.
/// The result itself carries no name; the pairing happens at collection
/// time so the wire format can report per-check identities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: String,
    pub result: CheckResult,
}

/// Point-in-time health snapshot, recomputed on every request.
#[derive(Debug)]
pub struct HealthInfo {
    pub name: String,
    pub description: String,
    pub health: HealthStatus,
    pub check_results: Vec<CheckOutcome>,
}

/// Identity, ownership and provenance metadata. Not a health signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutInfo {
    pub name: String,
    pub description: String,
    pub owners: Vec<Owner>,
    pub links: Vec<Link>,
    pub revision: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ordering_matches_severity() {
        assert!(HealthStatus::Healthy < HealthStatus::Degraded);
        assert!(HealthStatus::Degraded < HealthStatus::Unhealthy);
    }

    #[test]
    fn healthy_result_leaves_action_and_impact_empty() {
        let result = CheckResult::healthy("all good");
        assert_eq!(result.status, HealthStatus::Healthy);
        assert_eq!(result.output, "all good");
        assert_eq!(result.action, "");
        assert_eq!(result.impact, "");
    }

    #[test]
    fn degraded_result_carries_action_but_no_impact() {
        let result = CheckResult::degraded("queue backlog", "scale consumers");
        assert_eq!(result.status, HealthStatus::Degraded);
        assert_eq!(result.action, "scale consumers");
        assert_eq!(result.impact, "");
    }

    #[test]
    fn func_check_reports_name_and_runs_closure() {
        let check = FuncCheck::new("db", || CheckResult::unhealthy("down", "restart", "no writes"));
        assert_eq!(check.name(), "db");
        assert_eq!(check.run().status, HealthStatus::Unhealthy);
    }
}
