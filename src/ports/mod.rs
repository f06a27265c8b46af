use thiserror::Error;

pub mod drive;
pub mod sheets;

/// Context for failures while talking to the remote Google APIs.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to list folder contents")]
    FolderListing,
    #[error("Failed to fetch spreadsheet metadata")]
    SpreadsheetMetadata,
    #[error("Failed to fetch worksheet values")]
    WorksheetValues,
}
