pub mod github;
pub mod package_json;

pub use github::{ApiError, GitHubClient, ReleaseApi};
pub use package_json::read_version;
