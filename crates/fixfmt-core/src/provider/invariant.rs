use crate::error::DataError;
use crate::locale::LanguageIdentifier;
use crate::provider::{DataProvider, DataResponse, DecimalSymbolsV1};

/// Provider that answers every request with root data under `und`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvariantDataProvider;

impl DataProvider for InvariantDataProvider {
    fn load_decimal_symbols(
        &self,
        langid: &LanguageIdentifier,
    ) -> Result<DataResponse<DecimalSymbolsV1>, DataError> {
        tracing::trace!(%langid, "serving invariant decimal symbols");
        Ok(DataResponse {
            langid: LanguageIdentifier::und(),
            payload: DecimalSymbolsV1::root(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_locale_resolves_to_und() {
        let response = InvariantDataProvider
            .load_decimal_symbols(&"bn-IN".parse().unwrap())
            .unwrap();
        assert!(response.langid.is_und());
        assert_eq!(response.payload.zero_digit, '0');
    }
}
