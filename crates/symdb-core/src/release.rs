//! Known OS releases, keyed by version prefix.

use serde::Serialize;

/// A named OS release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Release {
    pub codename: &'static str,
    pub version: &'static str,
}

/// Releases recognized when summarizing a database, newest first
pub const KNOWN_RELEASES: &[Release] = &[
    Release {
        codename: "Windows 11 24H2",
        version: "10.0.26100",
    },
    Release {
        codename: "Windows 11 23H2",
        version: "10.0.22631",
    },
    Release {
        codename: "Windows 11 22H2",
        version: "10.0.22621",
    },
    Release {
        codename: "Windows 11 21H2",
        version: "10.0.22000",
    },
    Release {
        codename: "Windows 10 22H2",
        version: "10.0.19045",
    },
];

/// Find the release whose version is a prefix of `version`
///
/// Only whole dot-separated components match, so `10.0.2610` does not
/// match `10.0.26100`.
pub fn known_release(version: &str) -> Option<&'static Release> {
    KNOWN_RELEASES.iter().find(|release| {
        version
            .strip_prefix(release.version)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
    })
}
