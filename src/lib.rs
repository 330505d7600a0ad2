//! Release publishing for GitHub release channels
//!
//! This library looks up the releases of a repository, reuses or creates a
//! draft release for the current `package.json` version, and publishes it as a
//! prerelease targeting the matching milestone branch.
//!
//! # Examples
//!
//! ## Deriving tags
//!
//! ```
//! use publish_release::commands::publish_release::{commit_tag, release_tag};
//!
//! assert_eq!(release_tag("1.2.3", "beta"), "v1.2.3beta");
//! assert_eq!(commit_tag("1.2.3").as_deref(), Some("1.2.x"));
//! assert_eq!(commit_tag("1.2"), None);
//! ```
//!
//! ## Publishing
//!
//! ```no_run
//! use publish_release::{
//!     commands::publish_release::publish,
//!     types::Config,
//!     utils::GitHubClient,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::new("ghp_token", "beta");
//! let client = GitHubClient::new(&config)?;
//! let outcome = publish(&config, &client).await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod types;
pub mod utils;

pub use commands::publish_release;

pub type Result<T> = anyhow::Result<T>;
