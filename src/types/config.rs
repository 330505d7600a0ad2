use {
    clap::Args,
    std::path::PathBuf,
    thiserror::Error,
};

pub const DEFAULT_REPO: &str = "brave/browser-laptop";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_RELEASE_NAME: &str = "Dev Channel Beta";
pub const DEFAULT_TARGET_ARCH: &str = "x64";
pub const DEFAULT_MANIFEST: &str = "package.json";

#[derive(Args, Debug, Clone)]
pub struct CommandArgs {
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, help = "GitHub personal token")]
    pub token: Option<String>,

    #[arg(long, env = "CHANNEL", help = "Release channel appended to the tag, e.g. beta")]
    pub channel: Option<String>,

    #[arg(long, env = "TARGET_ARCH", default_value = DEFAULT_TARGET_ARCH)]
    pub target_arch: String,

    #[arg(long, default_value = DEFAULT_REPO, help = "Repository as owner/name")]
    pub repo: String,

    #[arg(long, default_value = DEFAULT_MANIFEST, help = "Manifest to read the version from")]
    pub manifest: PathBuf,

    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[arg(long, default_value = DEFAULT_RELEASE_NAME, help = "Prefix of the release title")]
    pub release_name: String,

    #[arg(long, help = "Log what would be created or published without doing it")]
    pub dry_run: bool,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Please set the $GITHUB_TOKEN environment variable, which is your personal token")]
    MissingToken,
    #[error("Please set the $CHANNEL environment variable, which is your release channel")]
    MissingChannel,
}

/// Settings for a single run, validated once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub channel: String,
    /// Read for parity with the build environment; nothing consumes it.
    pub target_arch: String,
    pub repo: String,
    pub manifest: PathBuf,
    pub api_url: String,
    pub release_name: String,
    pub dry_run: bool,
}

impl Config {
    pub fn new(token: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            channel: channel.into(),
            target_arch: DEFAULT_TARGET_ARCH.to_string(),
            repo: DEFAULT_REPO.to_string(),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            api_url: DEFAULT_API_URL.to_string(),
            release_name: DEFAULT_RELEASE_NAME.to_string(),
            dry_run: false,
        }
    }
}

impl TryFrom<CommandArgs> for Config {
    type Error = ConfigError;

    fn try_from(args: CommandArgs) -> Result<Self, Self::Error> {
        // empty values count as unset
        let token = args
            .token
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken)?;
        let channel = args
            .channel
            .filter(|channel| !channel.is_empty())
            .ok_or(ConfigError::MissingChannel)?;

        Ok(Self {
            token,
            channel,
            target_arch: args.target_arch,
            repo: args.repo,
            manifest: args.manifest,
            api_url: args.api_url.trim_end_matches('/').to_string(),
            release_name: args.release_name,
            dry_run: args.dry_run,
        })
    }
}
