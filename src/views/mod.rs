use crate::errors::OpsError;
use crate::health::{AboutInfo, CheckOutcome, HealthInfo, HealthStatus, Link, Owner};
use serde::{Deserialize, Serialize};

/// Wire rendition of a health status; serialized by variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Health {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OwnerResponse {
    pub name: String,
    pub slack: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkResponse {
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuildInfo {
    pub revision: String,
}

/// Body of the about endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AboutResponse {
    pub name: String,
    pub description: String,
    pub owners: Vec<OwnerResponse>,
    pub links: Vec<LinkResponse>,
    #[serde(rename = "Build-info")]
    pub build_info: BuildInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckResponse {
    pub name: String,
    pub health: Health,
    pub output: String,
    pub action: String,
    pub impact: String,
}

/// Body of the health endpoint. The HTTP status is always 200; this payload
/// conveys the health state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HealthResponse {
    pub name: String,
    pub description: String,
    pub health: Health,
    pub checks: Vec<CheckResponse>,
}

fn map_health(status: HealthStatus) -> Result<Health, OpsError> {
    // Exhaustive over the closed status set; a new variant without a wire
    // mapping must fail here as UnsupportedValue, never serialize blindly.
    match status {
        HealthStatus::Healthy => Ok(Health::Healthy),
        HealthStatus::Degraded => Ok(Health::Degraded),
        HealthStatus::Unhealthy => Ok(Health::Unhealthy),
    }
}

impl From<&Owner> for OwnerResponse {
    fn from(owner: &Owner) -> Self {
        Self {
            name: owner.name.clone(),
            slack: owner.slack.clone(),
        }
    }
}

impl From<&Link> for LinkResponse {
    fn from(link: &Link) -> Self {
        Self {
            url: link.url.clone(),
            description: link.description.clone(),
        }
    }
}

impl From<&AboutInfo> for AboutResponse {
    fn from(about: &AboutInfo) -> Self {
        Self {
            name: about.name.clone(),
            description: about.description.clone(),
            owners: about.owners.iter().map(OwnerResponse::from).collect(),
            links: about.links.iter().map(LinkResponse::from).collect(),
            build_info: BuildInfo {
                revision: about.revision.clone(),
            },
        }
    }
}

impl TryFrom<&CheckOutcome> for CheckResponse {
    type Error = OpsError;

    fn try_from(outcome: &CheckOutcome) -> Result<Self, Self::Error> {
        Ok(Self {
            name: outcome.name.clone(),
            health: map_health(outcome.result.status)?,
            output: outcome.result.output.clone(),
            action: outcome.result.action.clone(),
            impact: outcome.result.impact.clone(),
        })
    }
}

impl TryFrom<&HealthInfo> for HealthResponse {
    type Error = OpsError;

    fn try_from(info: &HealthInfo) -> Result<Self, Self::Error> {
        Ok(Self {
            name: info.name.clone(),
            description: info.description.clone(),
            health: map_health(info.health)?,
            checks: info
                .check_results
                .iter()
                .map(CheckResponse::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::CheckResult;

    #[test]
    fn about_response_carries_owners_links_and_revision() {
        let about = AboutInfo {
            name: "app".to_string(),
            description: "an app".to_string(),
            owners: vec![Owner::new("ownername", "ownerslack")],
            links: vec![Link::new("link", "description")],
            revision: "abcdefg".to_string(),
        };

        let response = AboutResponse::from(&about);
        assert_eq!(response.owners[0].name, "ownername");
        assert_eq!(response.owners[0].slack, "ownerslack");
        assert_eq!(response.links[0].url, "link");
        assert_eq!(response.links[0].description, "description");
        assert_eq!(response.build_info.revision, "abcdefg");
    }

    #[test]
    fn about_response_serializes_with_build_info_key() {
        let about = AboutInfo {
            name: "app".to_string(),
            description: "an app".to_string(),
            owners: vec![Owner::new("ownername", "")],
            links: vec![Link::new("link", "")],
            revision: "abcdefg".to_string(),
        };

        let json = serde_json::to_value(AboutResponse::from(&about)).unwrap();
        assert_eq!(json["Name"], "app");
        assert_eq!(json["Owners"][0]["Name"], "ownername");
        assert_eq!(json["Links"][0]["Url"], "link");
        assert_eq!(json["Build-info"]["Revision"], "abcdefg");
    }

    #[test]
    fn health_response_serializes_statuses_by_name() {
        let info = HealthInfo {
            name: "app".to_string(),
            description: "an app".to_string(),
            health: HealthStatus::Degraded,
            check_results: vec![CheckOutcome {
                name: "db".to_string(),
                result: CheckResult::degraded("slow", "scale"),
            }],
        };

        let json =
            serde_json::to_value(HealthResponse::try_from(&info).unwrap()).unwrap();
        assert_eq!(json["Health"], "Degraded");
        assert_eq!(json["Checks"][0]["Name"], "db");
        assert_eq!(json["Checks"][0]["Health"], "Degraded");
        assert_eq!(json["Checks"][0]["Output"], "slow");
        assert_eq!(json["Checks"][0]["Action"], "scale");
        assert_eq!(json["Checks"][0]["Impact"], "");
    }
}
