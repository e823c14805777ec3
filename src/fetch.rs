//! Dataset sources: where raw CSV text comes from

use std::path::PathBuf;

use async_trait::async_trait;

use crate::dataset::Dataset;
use crate::error::{PainelError, Result};

/// Provider of raw dataset text addressed by a relative path
///
/// The dashboard only needs a text body per path; how it is obtained (HTTP,
/// local directory, test double) is the implementor's business. A non-success
/// response must surface as an error rather than an empty body.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch the text body for `path`, e.g. `datasets/modalidade.csv`
    async fn fetch_text(&self, path: &str) -> Result<String>;
}

/// HTTP-backed source resolving paths against a base URL
pub struct HttpSource {
    client: reqwest::Client,
    base: url::Url,
}

impl HttpSource {
    /// Create a source from a base URL such as `https://painel.example.org/`
    pub fn new(base: &str) -> Result<Self> {
        let base = url::Url::parse(base).map_err(|err| PainelError::Fetch {
            path: base.to_string(),
            reason: err.to_string(),
        })?;
        Ok(HttpSource {
            client: reqwest::Client::new(),
            base,
        })
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let fetch_err = |reason: String| PainelError::Fetch {
            path: path.to_string(),
            reason,
        };

        let url = self
            .base
            .join(path)
            .map_err(|err| fetch_err(err.to_string()))?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| fetch_err(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PainelError::HttpStatus {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|err| fetch_err(err.to_string()))
    }
}

/// Directory-backed source for demos and tests
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Create a source rooted at a local directory
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        DirSource { root: root.into() }
    }
}

#[async_trait]
impl DatasetSource for DirSource {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        tokio::fs::read_to_string(&full)
            .await
            .map_err(|err| PainelError::Io {
                path: path.to_string(),
                reason: err.to_string(),
            })
    }
}

/// Fetch and parse one dataset
///
/// One fetch per call, no caching: the text is parsed and discarded. An empty
/// body is not an error; it parses to an empty dataset and the caller decides
/// what to show.
pub async fn load_dataset(source: &dyn DatasetSource, path: &str) -> Result<Dataset> {
    let text = source.fetch_text(path).await?;
    Ok(Dataset::parse(&text))
}
