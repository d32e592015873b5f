mod ops;
mod ops_middleware;

pub use ops::*;
pub use ops_middleware::*;

/// Reserved path segment under which the three endpoints live.
const RESERVED_PREFIX: &str = "/__";

/// Route parsed from the trailing segment of a reserved-prefix path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OpsRoute {
    Ready,
    Health,
    About,
    /// Under the reserved prefix, but not one of the three endpoints.
    Unrecognized,
}

impl OpsRoute {
    /// `None` means the path is not under the reserved prefix and the
    /// request belongs to the host's own pipeline.
    pub(crate) fn match_path(path: &str) -> Option<OpsRoute> {
        let rest = path.strip_prefix(RESERVED_PREFIX)?;
        let segment = if rest.is_empty() {
            // bare "/__" is claimed by the prefix but maps to nothing
            ""
        } else {
            rest.strip_prefix('/')?
        };

        Some(match segment {
            "ready" => OpsRoute::Ready,
            "health" => OpsRoute::Health,
            "about" => OpsRoute::About,
            _ => OpsRoute::Unrecognized,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_three_endpoints() {
        assert_eq!(OpsRoute::match_path("/__/ready"), Some(OpsRoute::Ready));
        assert_eq!(OpsRoute::match_path("/__/health"), Some(OpsRoute::Health));
        assert_eq!(OpsRoute::match_path("/__/about"), Some(OpsRoute::About));
    }

    #[test]
    fn unknown_segments_under_the_prefix_are_unrecognized() {
        assert_eq!(
            OpsRoute::match_path("/__/metrics"),
            Some(OpsRoute::Unrecognized)
        );
        assert_eq!(OpsRoute::match_path("/__"), Some(OpsRoute::Unrecognized));
        assert_eq!(
            OpsRoute::match_path("/__/ready/extra"),
            Some(OpsRoute::Unrecognized)
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            OpsRoute::match_path("/__/Ready"),
            Some(OpsRoute::Unrecognized)
        );
    }

    #[test]
    fn paths_outside_the_prefix_pass_through() {
        assert_eq!(OpsRoute::match_path("/"), None);
        assert_eq!(OpsRoute::match_path("/ready"), None);
        assert_eq!(OpsRoute::match_path("/__x/ready"), None);
        assert_eq!(OpsRoute::match_path("/api/v1/things"), None);
    }
}
