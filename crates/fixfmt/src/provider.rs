use std::path::Path;

use fixfmt_capi::{
    FixfmtDataProvider, ProviderKind, fixfmt_fs_data_provider_create,
    fixfmt_invariant_data_provider_create,
};

use crate::error::{Error, Result};
use crate::resource::{Resource, resource_wrapper};

/// An owned source of locale data.
#[derive(Debug)]
pub struct DataProvider(Resource<FixfmtDataProvider>);

resource_wrapper!(DataProvider, FixfmtDataProvider);

impl DataProvider {
    /// Open the JSON data bundle rooted at `path` (the directory holding
    /// `manifest.json`).
    pub fn from_fs(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let Some(root) = path.to_str() else {
            return Err(Error::DataProvider {
                location: path.display().to_string(),
            });
        };
        // SAFETY: `root` is valid for `root.len()` bytes.
        let result = unsafe { fixfmt_fs_data_provider_create(root.as_ptr().cast(), root.len()) };
        if !result.success {
            return Err(Error::DataProvider {
                location: root.to_string(),
            });
        }
        Ok(Self(Resource::adopt(result.provider)))
    }

    /// A provider serving locale-neutral root data for every locale.
    pub fn invariant() -> Result<Self> {
        let provider = fixfmt_invariant_data_provider_create();
        if provider.is_empty() {
            return Err(Error::DataProvider {
                location: "invariant".to_string(),
            });
        }
        Ok(Self(Resource::adopt(provider)))
    }

    /// Implementation behind the handle; `None` once moved out or destroyed.
    #[must_use]
    pub fn kind(&self) -> Option<ProviderKind> {
        self.0.as_ffi().provider_kind()
    }

    pub(crate) fn live(&self) -> Result<FixfmtDataProvider> {
        self.0.live()
    }
}
