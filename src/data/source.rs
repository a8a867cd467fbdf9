use std::fmt;
use std::path::PathBuf;

use tokio::fs;

use super::store::DataStore;
use crate::error::LoadError;

/// Location of the dataset document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Url(trimmed.to_owned())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }

    /// Reads and parses the whole document. Called once at startup.
    pub async fn load(self) -> Result<DataStore, LoadError> {
        let bytes = match &self {
            DataSource::File(path) => fs::read(path).await.map_err(|source| LoadError::Read {
                path: path.clone(),
                source,
            })?,
            DataSource::Url(url) => fetch(url).await?,
        };

        serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
            origin: self.to_string(),
            source,
        })
    }
}

async fn fetch(url: &str) -> Result<Vec<u8>, LoadError> {
    let fetch_error = |source: reqwest::Error| LoadError::Fetch {
        url: url.to_owned(),
        source,
    };

    let response = reqwest::get(url)
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(fetch_error)?;
    let body = response.bytes().await.map_err(fetch_error)?;

    Ok(body.to_vec())
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}
