use super::ApiError;

/// One `{id, name}` record from a folder listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveFile {
    pub id: String,
    pub name: String,
}

/// One page of a folder listing. `next_page_token`, when present, gates the
/// request for the following page.
#[derive(Debug, Default)]
pub struct FilePage {
    pub files: Vec<DriveFile>,
    pub next_page_token: Option<String>,
}

pub const LIST_PAGE_SIZE: i32 = 100;

#[async_trait::async_trait]
pub trait DriveListing: Send + Sync {
    /// Lists the spreadsheet documents directly inside `folder_id`, skipping
    /// trashed files, at most [`LIST_PAGE_SIZE`] entries per page.
    async fn list_spreadsheets(
        &self,
        folder_id: &str,
        page_token: Option<&str>,
    ) -> error_stack::Result<FilePage, ApiError>;
}
