//! Where incidents are loaded from.

use std::fmt;
use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{IncidentStore, StoreError, inline};

/// A source of incident data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DataSource {
    /// The demo dataset compiled into the binary.
    #[default]
    Inline,
    /// A JSON file on disk.
    File {
        /// Path to the JSON document.
        path: PathBuf,
    },
    /// A JSON document fetched with an HTTP GET.
    Url {
        /// Absolute URL of the document.
        url: String,
    },
}

impl DataSource {
    /// Interprets a command-line location: `inline`, an `http(s)://` URL,
    /// or a file path.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        if location == "inline" {
            Self::Inline
        } else if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url {
                url: location.to_string(),
            }
        } else {
            Self::File {
                path: PathBuf::from(location),
            }
        }
    }

    /// Reads the incidents from this source.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read, the request
    /// fails, or the document cannot be parsed.
    pub async fn load(&self) -> Result<IncidentStore, StoreError> {
        match self {
            Self::Inline => Ok(IncidentStore::new(inline::demo_incidents(Utc::now()))),
            Self::File { path } => {
                log::debug!("Reading incidents from {}", path.display());
                let body = tokio::fs::read_to_string(path).await?;
                IncidentStore::from_json_str(&body)
            }
            Self::Url { url } => {
                log::debug!("Fetching incidents from {url}");
                let body = reqwest::get(url)
                    .await?
                    .error_for_status()?
                    .text()
                    .await?;
                IncidentStore::from_json_str(&body)
            }
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline => write!(f, "inline dataset"),
            Self::File { path } => write!(f, "{}", path.display()),
            Self::Url { url } => write!(f, "{url}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_locations() {
        assert_eq!(DataSource::from_location("inline"), DataSource::Inline);
        assert_eq!(
            DataSource::from_location("https://example.org/incidents.json"),
            DataSource::Url {
                url: "https://example.org/incidents.json".to_string()
            }
        );
        assert_eq!(
            DataSource::from_location("./data/incidents.json"),
            DataSource::File {
                path: PathBuf::from("./data/incidents.json")
            }
        );
    }

    #[tokio::test]
    async fn loads_file_source() {
        let tmp = std::env::temp_dir().join("lagekarte_store_test_file.json");
        std::fs::write(&tmp, include_str!("../data/incidents.json")).unwrap();

        let store = IncidentStore::load(&DataSource::File { path: tmp.clone() })
            .await
            .unwrap();
        assert_eq!(store.len(), 8);

        let _ = std::fs::remove_file(&tmp);
    }

    #[tokio::test]
    async fn missing_file_degrades_to_empty_store() {
        let source = DataSource::File {
            path: std::env::temp_dir().join("lagekarte_store_test_missing.json"),
        };
        assert!(matches!(source.load().await, Err(StoreError::Io(_))));
        assert!(IncidentStore::load_or_empty(&source).await.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_degrades_to_empty_store() {
        let tmp = std::env::temp_dir().join("lagekarte_store_test_malformed.json");
        std::fs::write(&tmp, "[{\"id\": 1").unwrap();

        let source = DataSource::File { path: tmp.clone() };
        assert!(matches!(source.load().await, Err(StoreError::Json(_))));
        assert!(IncidentStore::load_or_empty(&source).await.is_empty());

        let _ = std::fs::remove_file(&tmp);
    }

    #[tokio::test]
    async fn unreachable_url_degrades_to_empty_store() {
        let source = DataSource::Url {
            url: "http://127.0.0.1:9/incidents.json".to_string(),
        };
        assert!(IncidentStore::load_or_empty(&source).await.is_empty());
    }

    #[tokio::test]
    async fn inline_source_is_available() {
        let store = IncidentStore::load(&DataSource::Inline).await.unwrap();
        assert!(!store.is_empty());
    }

    #[test]
    fn deserializes_from_config() {
        let source: DataSource =
            serde_json::from_str(r#"{"kind": "file", "path": "data/incidents.json"}"#).unwrap();
        assert_eq!(
            source,
            DataSource::File {
                path: PathBuf::from("data/incidents.json")
            }
        );
    }
}
