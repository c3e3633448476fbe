use std::fmt;

use reqwest::Client;
use semver::Version;
use serde::Deserialize;
use thiserror::Error;

pub const APP_NAME: &str = "EarthWatch";
pub const APP_REPO_URL: &str = "https://github.com/mkrueger42/earthwatch";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

const GITHUB_OWNER: &str = "mkrueger42";
const GITHUB_REPO: &str = "earthwatch";

/// Outcome of comparing the running build against the newest GitHub release.
#[derive(Clone, Debug)]
pub struct ReleaseCheck {
    pub running: Version,
    pub latest: Version,
    pub latest_tag: String,
}

impl ReleaseCheck {
    pub fn newer_available(&self) -> bool {
        self.latest > self.running
    }
}

impl fmt::Display for ReleaseCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.newer_available() {
            write!(
                f,
                "{} {} is available (running v{}).",
                APP_NAME, self.latest_tag, self.running
            )
        } else {
            write!(f, "Up to date on {}.", self.latest_tag)
        }
    }
}

#[derive(Debug, Error)]
pub enum ReleaseCheckError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid version tag {tag:?}: {source}")]
    InvalidTag { tag: String, source: semver::Error },
}

#[derive(Deserialize)]
struct LatestRelease {
    tag_name: String,
}

/// Asks GitHub for the newest published release of this repository.
pub async fn check_latest_release() -> Result<ReleaseCheck, ReleaseCheckError> {
    let user_agent = format!("{}/{} (+{})", APP_NAME, version_label(), APP_REPO_URL);
    let client = Client::builder().user_agent(user_agent).build()?;

    let url = format!(
        "https://api.github.com/repos/{GITHUB_OWNER}/{GITHUB_REPO}/releases/latest"
    );
    let release = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<LatestRelease>()
        .await?;

    Ok(ReleaseCheck {
        running: running_version()?,
        latest: parse_tag(&release.tag_name)?,
        latest_tag: release.tag_name,
    })
}

/// Version of the running build: the git tag baked in at build time when
/// present, the crate version otherwise.
pub fn running_version() -> Result<Version, ReleaseCheckError> {
    parse_tag(GIT_TAG.unwrap_or(APP_VERSION))
}

pub fn version_label() -> String {
    match GIT_TAG {
        Some(tag) => tag.to_string(),
        None => format!("v{APP_VERSION}"),
    }
}

fn parse_tag(tag: &str) -> Result<Version, ReleaseCheckError> {
    let trimmed = tag.trim().trim_start_matches(['v', 'V']);
    Version::parse(trimmed).map_err(|source| ReleaseCheckError::InvalidTag {
        tag: tag.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_with_or_without_a_v_prefix() {
        assert_eq!(parse_tag("v1.2.3").unwrap(), Version::new(1, 2, 3));
        assert_eq!(parse_tag("1.2.3").unwrap(), Version::new(1, 2, 3));
        assert!(parse_tag("release-one").is_err());
    }

    #[test]
    fn newer_available_compares_strictly() {
        let check = ReleaseCheck {
            running: Version::new(0, 5, 0),
            latest: Version::new(0, 5, 0),
            latest_tag: "v0.5.0".to_string(),
        };
        assert!(!check.newer_available());

        let check = ReleaseCheck {
            latest: Version::new(0, 6, 0),
            ..check
        };
        assert!(check.newer_available());
    }

    #[test]
    fn update_notice_names_both_versions() {
        let check = ReleaseCheck {
            running: Version::new(0, 5, 0),
            latest: Version::new(0, 6, 0),
            latest_tag: "v0.6.0".to_string(),
        };
        assert_eq!(
            check.to_string(),
            "EarthWatch v0.6.0 is available (running v0.5.0)."
        );
    }
}
