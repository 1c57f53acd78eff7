//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::ItemNotFound(item) => {
            format!("Item {:?} is not committed to by this input; no proof exists.", item)
        }
        _ => e.to_string(),
    }
}
