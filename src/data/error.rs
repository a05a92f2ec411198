use thiserror::Error;

use super::magnitude::MagnitudeError;
use super::model::MagnitudeField;

/// Errors raised while evaluating the catalog against a filter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A magnitude column could not be parsed. This is a data problem in the
    /// catalog, never a problem with the filter state.
    #[error("product {id}: malformed {field} value '{raw}': {source}")]
    MalformedMagnitude {
        id: u32,
        field: MagnitudeField,
        raw: String,
        #[source]
        source: MagnitudeError,
    },
}

impl FilterError {
    /// Id of the record that triggered the error.
    pub fn product_id(&self) -> u32 {
        match self {
            FilterError::MalformedMagnitude { id, .. } => *id,
        }
    }
}
