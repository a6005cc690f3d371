//! Image source resolution: local files and http(s) URLs.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default timeout for HTTP requests (30 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// An http(s) URL fetched over the network
    Url(String),
    /// A path on the local filesystem
    Path(PathBuf),
}

impl ImageSource {
    /// Classify a source string: `http://` and `https://` prefixes are
    /// URLs, everything else is treated as a filesystem path.
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            ImageSource::Url(input.to_string())
        } else {
            ImageSource::Path(PathBuf::from(input))
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Url(url) => write!(f, "{}", url),
            ImageSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Errors that can occur while loading source bytes.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read '{path}': {source}")]
    Io {
        /// The file that could not be read
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("request to '{url}' failed: {source}")]
    Http {
        /// The URL that could not be fetched
        url: String,
        source: reqwest::Error,
    },

    #[error("'{url}' returned HTTP {status}")]
    Status {
        /// The URL that was fetched
        url: String,
        /// The non-success HTTP status code
        status: u16,
    },
}

impl FetchError {
    fn io(path: &PathBuf, source: std::io::Error) -> Self {
        FetchError::Io {
            path: path.clone(),
            source,
        }
    }

    fn http(url: &str, source: reqwest::Error) -> Self {
        FetchError::Http {
            url: url.to_string(),
            source,
        }
    }
}

/// Load the raw bytes of an image source.
///
/// Blocks until the read or download completes; network requests use
/// connect and overall timeouts.
pub fn load(source: &ImageSource) -> Result<Vec<u8>, FetchError> {
    match source {
        ImageSource::Path(path) => fs::read(path).map_err(|e| FetchError::io(path, e)),
        ImageSource::Url(url) => {
            log::info!("fetching image from {}", url);
            let client = reqwest::blocking::Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
                .build()
                .map_err(|e| FetchError::http(url, e))?;
            let response = client.get(url).send().map_err(|e| FetchError::http(url, e))?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    url: url.clone(),
                    status: status.as_u16(),
                });
            }
            let bytes = response.bytes().map_err(|e| FetchError::http(url, e))?;
            log::info!("fetched {} bytes from {}", bytes.len(), url);
            Ok(bytes.to_vec())
        }
    }
}
