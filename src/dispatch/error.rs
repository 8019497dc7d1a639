//! Dispatcher error kinds
//!
//! None of these reach the caller: `transition` turns each into a reply.

use super::Step;
use crate::catalog::CatalogError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// Free text was neither a hex color nor a font size
    #[error("Malformed color: {0:?}")]
    MalformedColor(String),

    /// `feel` + energy did not resolve to a palette group
    #[error("Unknown choice group: {0:?}")]
    UnknownChoiceGroup(String),

    #[error("Unrecognized input {message:?} at step {step}")]
    UnrecognizedInput { step: Step, message: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
