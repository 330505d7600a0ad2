use serde::{Deserialize, Serialize};

/// A release as returned by the GitHub releases API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub id: u64,
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
    #[serde(default)]
    pub target_commitish: String,
}

/// Body of `POST /repos/{repo}/releases`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRelease {
    pub tag_name: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

/// Body of `PATCH /repos/{repo}/releases/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleasePatch {
    pub draft: bool,
    pub prerelease: bool,
    pub tag_name: String,
    pub target_commitish: String,
}
