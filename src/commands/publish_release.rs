use {
    crate::{
        types::{Config, NewRelease, Release, ReleasePatch},
        utils::{
            github::{GitHubClient, ReleaseApi},
            package_json::read_version,
        },
    },
    anyhow::{Context, Result},
    log::{debug, info, warn},
    semver::Version,
    std::fmt,
    thiserror::Error,
};

pub use crate::types::CommandArgs;

/// Tag given to a new draft when the real tag is already published.
pub const DO_NOT_PUBLISH_TAG: &str = "do-not-publish-me";

pub const PLACEHOLDER_BODY: &str = "(placeholder)";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PublishError {
    #[error("quit due to empty release note")]
    EmptyReleaseNotes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftAction {
    Reuse { id: u64, tag_name: String },
    Create(NewRelease),
}

/// Everything a run is going to do, decided before any write to GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub tag: String,
    pub tag_exists: bool,
    pub draft: DraftAction,
    pub publish: Option<ReleasePatch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Published {
        id: u64,
        tag: String,
        commit_tag: String,
    },
    AlreadyPublished {
        tag: String,
    },
    /// The version has no milestone commit tag, so the draft is left alone.
    NoCommitTag {
        tag: String,
        version: String,
    },
    DryRun(ReleasePlan),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Published {
                id,
                tag,
                commit_tag,
            } => write!(f, "published release {id} as {tag} targeting {commit_tag}"),
            Outcome::AlreadyPublished { tag } => write!(f, "{tag} is already published"),
            Outcome::NoCommitTag { tag, version } => write!(
                f,
                "not publishing {tag}: version {version} does not have three components"
            ),
            Outcome::DryRun(plan) => {
                match &plan.draft {
                    DraftAction::Reuse { id, tag_name } => {
                        write!(f, "would reuse draft {id} ({tag_name})")?
                    }
                    DraftAction::Create(new) => {
                        write!(f, "would create draft \"{}\" ({})", new.name, new.tag_name)?
                    }
                }
                match &plan.publish {
                    Some(patch) => write!(
                        f,
                        " and publish it as {} targeting {}",
                        patch.tag_name, patch.target_commitish
                    ),
                    None => write!(f, " and not publish it"),
                }
            }
        }
    }
}

/// `v` + version + channel, e.g. `v1.2.3beta`.
pub fn release_tag(version: &str, channel: &str) -> String {
    format!("v{version}{channel}")
}

/// Replaces the patch component with `x` (`1.2.3` -> `1.2.x`). Only versions
/// with exactly three dot separated parts have a commit tag.
pub fn commit_tag(version: &str) -> Option<String> {
    let mut parts: Vec<&str> = version.splitn(4, '.').collect();
    if parts.len() != 3 {
        return None;
    }
    parts[2] = "x";
    Some(parts.join("."))
}

pub fn tag_exists(releases: &[Release], tag: &str) -> bool {
    releases
        .iter()
        .any(|release| !release.draft && release.tag_name == tag)
}

/// The first draft in API order, whatever its tag.
pub fn find_draft(releases: &[Release]) -> Option<&Release> {
    releases.iter().find(|release| release.draft)
}

pub fn new_draft(release_name: &str, tag: &str, body: &str) -> Result<NewRelease, PublishError> {
    if body.is_empty() {
        return Err(PublishError::EmptyReleaseNotes);
    }
    Ok(NewRelease {
        tag_name: tag.to_string(),
        name: format!("{release_name} {tag}"),
        body: body.to_string(),
        draft: true,
        prerelease: true,
    })
}

pub fn plan(config: &Config, version: &str, releases: &[Release]) -> Result<ReleasePlan, PublishError> {
    let tag = release_tag(version, &config.channel);
    let tag_exists = tag_exists(releases, &tag);

    let draft = match find_draft(releases) {
        Some(draft) => DraftAction::Reuse {
            id: draft.id,
            tag_name: draft.tag_name.clone(),
        },
        None => {
            let draft_tag: &str = if tag_exists { DO_NOT_PUBLISH_TAG } else { &tag };
            DraftAction::Create(new_draft(&config.release_name, draft_tag, PLACEHOLDER_BODY)?)
        }
    };

    let publish = match commit_tag(version) {
        Some(commit_tag) if !tag_exists => Some(ReleasePatch {
            draft: false,
            prerelease: true,
            tag_name: tag.clone(),
            target_commitish: commit_tag,
        }),
        _ => None,
    };

    Ok(ReleasePlan {
        tag,
        tag_exists,
        draft,
        publish,
    })
}

pub async fn run(args: CommandArgs) -> Result<()> {
    let config = Config::try_from(args)?;
    debug!(
        "repo={} channel={} target_arch={} dry_run={}",
        config.repo, config.channel, config.target_arch, config.dry_run
    );
    let client = GitHubClient::new(&config)?;
    let outcome = publish(&config, &client).await?;
    info!("{outcome}");
    Ok(())
}

pub async fn publish(config: &Config, api: &impl ReleaseApi) -> Result<Outcome> {
    let releases = api
        .list_releases()
        .await
        .context(format!("failed to list releases of {}", config.repo))?;
    info!("found {} releases in {}", releases.len(), config.repo);

    let version = read_version(&config.manifest).context("failed to get current version")?;
    if let Err(err) = Version::parse(&version) {
        warn!("version {version} is not a semantic version: {err}");
    }

    let plan = plan(config, &version, &releases)?;
    info!("release tag is {}", plan.tag);
    if plan.tag_exists {
        info!("{} is already published", plan.tag);
    }

    if config.dry_run {
        return Ok(Outcome::DryRun(plan));
    }

    let id = match plan.draft {
        DraftAction::Reuse { id, tag_name } => {
            info!("reusing draft release {id} (tagged {tag_name})");
            id
        }
        DraftAction::Create(new) => {
            let created = api
                .create_release(&new)
                .await
                .context(format!("failed to create draft release {}", new.tag_name))?;
            info!("created draft release {} (tagged {})", created.id, new.tag_name);
            created.id
        }
    };

    let Some(patch) = plan.publish else {
        if plan.tag_exists {
            return Ok(Outcome::AlreadyPublished { tag: plan.tag });
        }
        return Ok(Outcome::NoCommitTag {
            tag: plan.tag,
            version,
        });
    };

    api.update_release(id, &patch)
        .await
        .context(format!("failed to publish release {id} as {}", patch.tag_name))?;

    Ok(Outcome::Published {
        id,
        tag: patch.tag_name,
        commit_tag: patch.target_commitish,
    })
}
