use std::env;

use anyhow::Context as _;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_MEME_API_URL: &str = "https://meme-api.com/gimme";
pub const DEFAULT_PAT_API_URL: &str = "https://api.waifu.pics/sfw/pat";

/// Client for the third-party image APIs used by the fun commands.
#[derive(Clone, Debug)]
pub struct ContentService {
    client: reqwest::Client,
    meme_url: String,
    pat_url: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Meme {
    pub title: String,
    pub url: String,
}

#[derive(Deserialize)]
struct PatResponse {
    url: String,
}

impl ContentService {
    pub fn new(meme_url: impl Into<String>, pat_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            meme_url: meme_url.into(),
            pat_url: pat_url.into(),
        }
    }

    /// Build the service from `MEME_API_URL` / `PAT_API_URL`, falling back to
    /// the public endpoints.
    pub fn from_env() -> Self {
        let meme_url = env_url("MEME_API_URL").unwrap_or_else(|| DEFAULT_MEME_API_URL.to_owned());
        let pat_url = env_url("PAT_API_URL").unwrap_or_else(|| DEFAULT_PAT_API_URL.to_owned());
        Self::new(meme_url, pat_url)
    }

    pub async fn random_meme(&self) -> anyhow::Result<Meme> {
        debug!(url = %self.meme_url, "fetching meme");
        let meme = self
            .client
            .get(&self.meme_url)
            .send()
            .await
            .context("meme request failed")?
            .error_for_status()
            .context("meme api returned an error status")?
            .json::<Meme>()
            .await
            .context("failed to decode meme response")?;

        Ok(meme)
    }

    /// Fetch the URL of a random head-pat gif.
    pub async fn pat_gif(&self) -> anyhow::Result<String> {
        debug!(url = %self.pat_url, "fetching pat gif");
        let response = self
            .client
            .get(&self.pat_url)
            .send()
            .await
            .context("pat request failed")?
            .error_for_status()
            .context("pat api returned an error status")?
            .json::<PatResponse>()
            .await
            .context("failed to decode pat response")?;

        Ok(response.url)
    }
}

fn env_url(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
