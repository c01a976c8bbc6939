use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::DataError;
use crate::locale::LanguageIdentifier;
use crate::provider::{DECIMAL_SYMBOLS_V1_KEY, DataProvider, DataResponse, DecimalSymbolsV1};

const MANIFEST_FILE: &str = "manifest.json";
const JSON_SYNTAX: &str = "json";

#[derive(Debug, Clone, Deserialize)]
struct Manifest {
    syntax: String,
    #[serde(default)]
    locales: Vec<String>,
}

/// Provider backed by a JSON data bundle on disk.
///
/// Construction only validates the manifest; entries are read lazily on
/// each load, walking the requested identifier's fallback chain.
#[derive(Debug, Clone)]
pub struct FsDataProvider {
    root: PathBuf,
    manifest: Manifest,
}

impl FsDataProvider {
    /// Open the bundle rooted at `root`.
    ///
    /// Fails if `root/manifest.json` is missing, unreadable, not valid JSON,
    /// or declares a syntax other than `json`.
    pub fn try_new(root: impl Into<PathBuf>) -> Result<Self, DataError> {
        let root = root.into();
        let manifest: Manifest = read_json(&root.join(MANIFEST_FILE))?;
        if manifest.syntax != JSON_SYNTAX {
            return Err(DataError::UnsupportedSyntax {
                syntax: manifest.syntax,
            });
        }
        tracing::debug!(
            root = %root.display(),
            locales = manifest.locales.len(),
            "opened data bundle"
        );
        Ok(Self { root, manifest })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Locales the manifest advertises.
    #[must_use]
    pub fn locales(&self) -> &[String] {
        &self.manifest.locales
    }

    fn entry_path(&self, langid: &LanguageIdentifier) -> PathBuf {
        let mut path = self.root.clone();
        path.extend(DECIMAL_SYMBOLS_V1_KEY);
        path.push(format!("{langid}.json"));
        path
    }
}

impl DataProvider for FsDataProvider {
    fn load_decimal_symbols(
        &self,
        langid: &LanguageIdentifier,
    ) -> Result<DataResponse<DecimalSymbolsV1>, DataError> {
        for candidate in langid.fallback_chain() {
            let path = self.entry_path(&candidate);
            if !path.is_file() {
                continue;
            }
            let payload = read_json(&path)?;
            tracing::trace!(requested = %langid, resolved = %candidate, "loaded decimal symbols");
            return Ok(DataResponse {
                langid: candidate,
                payload,
            });
        }
        Err(DataError::MissingLocale {
            langid: langid.to_string(),
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| DataError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
