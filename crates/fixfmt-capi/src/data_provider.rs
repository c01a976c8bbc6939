//! Data provider handles.
//!
//! Unlike the other handles, a data provider is passed by value as a
//! two-field struct: the address of the boxed provider and a discriminant
//! naming its implementation. `{NULL, 0}` is the empty sentinel.

use std::ffi::c_void;
use std::os::raw::c_char;
use std::ptr;

use fixfmt_core::{DataProvider, FsDataProvider, InvariantDataProvider};

use crate::accounting::{self, HandleKind};
use crate::{byte_slice, guard};

type ErasedProvider = Box<dyn DataProvider>;

/// Which implementation sits behind a [`FixfmtDataProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Fs,
    Invariant,
}

impl ProviderKind {
    const FS: usize = 1;
    const INVARIANT: usize = 2;

    #[must_use]
    pub const fn to_raw(self) -> usize {
        match self {
            Self::Fs => Self::FS,
            Self::Invariant => Self::INVARIANT,
        }
    }

    #[must_use]
    pub const fn from_raw(raw: usize) -> Option<Self> {
        match raw {
            Self::FS => Some(Self::Fs),
            Self::INVARIANT => Some(Self::Invariant),
            _ => None,
        }
    }
}

/// Opaque data provider handle.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixfmtDataProvider {
    /// Boxed provider; null when empty.
    pub ptr: *mut c_void,
    /// [`ProviderKind`] discriminant; 0 when empty.
    pub kind: usize,
}

impl FixfmtDataProvider {
    pub const EMPTY: Self = Self {
        ptr: ptr::null_mut(),
        kind: 0,
    };

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ptr.is_null()
    }

    #[must_use]
    pub fn provider_kind(&self) -> Option<ProviderKind> {
        if self.is_empty() {
            return None;
        }
        ProviderKind::from_raw(self.kind)
    }

    fn from_provider(provider: ErasedProvider, kind: ProviderKind) -> Self {
        accounting::record_create(HandleKind::DataProvider);
        Self {
            ptr: Box::into_raw(Box::new(provider)).cast(),
            kind: kind.to_raw(),
        }
    }

    /// Borrow the provider behind a live handle.
    ///
    /// # Safety
    ///
    /// `self` must be empty or a live handle from one of the constructors,
    /// and the borrow must end before the handle is destroyed.
    pub(crate) unsafe fn as_provider<'a>(&self) -> Option<&'a dyn DataProvider> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: a non-empty handle holds a `Box<ErasedProvider>` from `from_provider`.
        let erased = unsafe { &*self.ptr.cast::<ErasedProvider>() };
        Some(erased.as_ref())
    }
}

impl Default for FixfmtDataProvider {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Result of [`fixfmt_fs_data_provider_create`]. `provider` is empty unless
/// `success` is true.
#[repr(C)]
#[derive(Debug)]
pub struct FixfmtCreateDataProviderResult {
    pub provider: FixfmtDataProvider,
    pub success: bool,
}

impl FixfmtCreateDataProviderResult {
    fn failure() -> Self {
        Self {
            provider: FixfmtDataProvider::EMPTY,
            success: false,
        }
    }
}

/// Open the JSON data bundle rooted at the UTF-8 path `path[..len]`.
///
/// Fails when the path is not UTF-8 or does not hold a readable bundle.
///
/// # Safety
///
/// `path` must be valid for reads of `len` bytes (it may be null if `len` is 0).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fixfmt_fs_data_provider_create(
    path: *const c_char,
    len: usize,
) -> FixfmtCreateDataProviderResult {
    guard(
        "fixfmt_fs_data_provider_create",
        FixfmtCreateDataProviderResult::failure(),
        || {
            // SAFETY: forwarded caller contract.
            let Some(root) = (unsafe { byte_slice(path, len) })
                .and_then(|bytes| std::str::from_utf8(bytes).ok())
            else {
                tracing::debug!("data bundle path is null or not UTF-8");
                return FixfmtCreateDataProviderResult::failure();
            };
            match FsDataProvider::try_new(root) {
                Ok(provider) => FixfmtCreateDataProviderResult {
                    provider: FixfmtDataProvider::from_provider(
                        Box::new(provider),
                        ProviderKind::Fs,
                    ),
                    success: true,
                },
                Err(err) => {
                    tracing::debug!(root, error = %err, "failed to open data bundle");
                    FixfmtCreateDataProviderResult::failure()
                }
            }
        },
    )
}

/// Create a provider that serves root data for every locale. Never fails.
#[unsafe(no_mangle)]
pub extern "C" fn fixfmt_invariant_data_provider_create() -> FixfmtDataProvider {
    guard(
        "fixfmt_invariant_data_provider_create",
        FixfmtDataProvider::EMPTY,
        || FixfmtDataProvider::from_provider(Box::new(InvariantDataProvider), ProviderKind::Invariant),
    )
}

/// Destructor for [`FixfmtDataProvider`]. The empty sentinel is a no-op.
///
/// # Safety
///
/// `provider` must be empty or a handle from one of the constructors that
/// has not been destroyed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fixfmt_data_provider_destroy(provider: FixfmtDataProvider) {
    if provider.is_empty() {
        return;
    }
    guard("fixfmt_data_provider_destroy", (), || {
        // SAFETY: a non-empty handle owns a `Box<ErasedProvider>`.
        drop(unsafe { Box::from_raw(provider.ptr.cast::<ErasedProvider>()) });
        accounting::record_destroy(HandleKind::DataProvider);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(path: &str) -> FixfmtCreateDataProviderResult {
        unsafe { fixfmt_fs_data_provider_create(path.as_ptr().cast(), path.len()) }
    }

    #[test]
    fn missing_bundle_fails_without_allocation() {
        let before = accounting::snapshot();
        let dir = tempfile::tempdir().unwrap();
        let result = open(dir.path().to_str().unwrap());
        assert!(!result.success);
        assert!(result.provider.is_empty());
        assert_eq!(result.provider.kind, 0);
        assert_eq!(accounting::snapshot(), before);
    }

    #[test]
    fn bundle_opens_as_fs_kind() {
        let root = concat!(env!("CARGO_MANIFEST_DIR"), "/../../testdata/data/json");
        let result = open(root);
        assert!(result.success);
        assert_eq!(result.provider.provider_kind(), Some(ProviderKind::Fs));
        let provider = unsafe { result.provider.as_provider() }.unwrap();
        assert!(provider.load_decimal_symbols(&"bn".parse().unwrap()).is_ok());
        unsafe { fixfmt_data_provider_destroy(result.provider) };
    }

    #[test]
    fn invariant_provider_is_live() {
        let before = accounting::snapshot().data_provider;
        let provider = fixfmt_invariant_data_provider_create();
        assert_eq!(provider.provider_kind(), Some(ProviderKind::Invariant));
        unsafe { fixfmt_data_provider_destroy(provider) };
        let after = accounting::snapshot().data_provider;
        assert_eq!(after.live(), before.live());
        assert_eq!(after.destroyed - before.destroyed, 1);
    }

    #[test]
    fn empty_sentinel_destroy_is_noop() {
        let before = accounting::snapshot();
        unsafe { fixfmt_data_provider_destroy(FixfmtDataProvider::EMPTY) };
        assert_eq!(accounting::snapshot(), before);
        assert_eq!(FixfmtDataProvider::EMPTY.provider_kind(), None);
    }

    #[test]
    fn kind_round_trips() {
        for kind in [ProviderKind::Fs, ProviderKind::Invariant] {
            assert_eq!(ProviderKind::from_raw(kind.to_raw()), Some(kind));
        }
        assert_eq!(ProviderKind::from_raw(0), None);
    }
}
