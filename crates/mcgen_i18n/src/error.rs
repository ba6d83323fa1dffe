use thiserror::Error;

use crate::catalog::CatalogParseError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error(transparent)]
    CatalogParse(#[from] CatalogParseError),

    #[error("locale store error: {0}")]
    Store(#[from] StoreError),
}
