use {
    crate::types::{Config, NewRelease, Release, ReleasePatch},
    log::debug,
    reqwest::{Client, RequestBuilder, Response},
    serde::de::DeserializeOwned,
    thiserror::Error,
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to build the GitHub client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("trouble communicating with GitHub while {activity}: {source}")]
    Request {
        activity: &'static str,
        source: reqwest::Error,
    },
    #[error("trouble decoding the response from GitHub while {activity}: {source}")]
    Response {
        activity: &'static str,
        source: reqwest::Error,
    },
}

/// The slice of the GitHub releases API this tool needs.
#[allow(async_fn_in_trait)]
pub trait ReleaseApi {
    async fn list_releases(&self) -> Result<Vec<Release>, ApiError>;
    async fn create_release(&self, release: &NewRelease) -> Result<Release, ApiError>;
    async fn update_release(&self, id: u64, patch: &ReleasePatch) -> Result<Release, ApiError>;
}

pub struct GitHubClient {
    client: Client,
    releases_url: String,
    authorization: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self {
            client,
            releases_url: format!("{}/repos/{}/releases", config.api_url, config.repo),
            authorization: format!("Bearer {}", config.token),
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Accept", "application/vnd.github+json")
            .header("Authorization", &self.authorization)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        activity: &'static str,
    ) -> Result<T, ApiError> {
        self.authorized(request)
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(|source| ApiError::Request { activity, source })?
            .json()
            .await
            .map_err(|source| ApiError::Response { activity, source })
    }
}

impl ReleaseApi for GitHubClient {
    async fn list_releases(&self) -> Result<Vec<Release>, ApiError> {
        debug!("GET {}", self.releases_url);
        self.send(self.client.get(&self.releases_url), "listing releases")
            .await
    }

    async fn create_release(&self, release: &NewRelease) -> Result<Release, ApiError> {
        debug!("POST {} tag_name={}", self.releases_url, release.tag_name);
        self.send(
            self.client.post(&self.releases_url).json(release),
            "creating a draft release",
        )
        .await
    }

    async fn update_release(&self, id: u64, patch: &ReleasePatch) -> Result<Release, ApiError> {
        let url = format!("{}/{id}", self.releases_url);
        debug!("PATCH {url} tag_name={}", patch.tag_name);
        self.send(self.client.patch(&url).json(patch), "publishing a release")
            .await
    }
}
