use error_stack::ResultExt;
use google_drive3::{hyper, hyper_rustls, DriveHub};
use tracing::instrument;

use crate::ports::drive::{DriveFile, DriveListing, FilePage, LIST_PAGE_SIZE};
use crate::ports::ApiError;

use super::auth::ServiceAuthenticator;
use super::http_client::HttpsClient;

/// [`DriveListing`] over the Drive v3 API.
pub struct DriveHubListing {
    hub: DriveHub<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
}

impl DriveHubListing {
    pub fn new(client: HttpsClient, auth: ServiceAuthenticator) -> Self {
        DriveHubListing {
            hub: DriveHub::new(client, auth),
        }
    }
}

#[async_trait::async_trait]
impl DriveListing for DriveHubListing {
    #[instrument(skip(self))]
    async fn list_spreadsheets(
        &self,
        folder_id: &str,
        page_token: Option<&str>,
    ) -> error_stack::Result<FilePage, ApiError> {
        let query = format!(
            "mimeType='application/vnd.google-apps.spreadsheet' and '{folder_id}' in parents and trashed=false"
        );

        let mut call = self
            .hub
            .files()
            .list()
            .q(&query)
            .page_size(LIST_PAGE_SIZE)
            .param("fields", "nextPageToken, files(id, name)")
            .add_scope(google_drive3::api::Scope::Readonly);
        if let Some(token) = page_token {
            call = call.page_token(token);
        }

        let (_, listing) = call
            .doit()
            .await
            .change_context(ApiError::FolderListing)
            .attach_printable_lazy(|| format!("folder id {folder_id}"))?;

        let files = listing
            .files
            .unwrap_or_default()
            .into_iter()
            .filter_map(|file| {
                file.id.map(|id| DriveFile {
                    id,
                    name: file.name.unwrap_or_default(),
                })
            })
            .collect();

        Ok(FilePage {
            files,
            next_page_token: listing.next_page_token,
        })
    }
}
