use error_stack::ResultExt;
use google_sheets4::{hyper, hyper_rustls, Sheets};
use tracing::instrument;

use crate::ports::sheets::SpreadsheetSource;
use crate::ports::ApiError;

use super::auth::ServiceAuthenticator;
use super::http_client::HttpsClient;

/// [`SpreadsheetSource`] over the Sheets v4 API.
pub struct SheetsHubSource {
    hub: Sheets<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
}

impl SheetsHubSource {
    pub fn new(client: HttpsClient, auth: ServiceAuthenticator) -> Self {
        SheetsHubSource {
            hub: Sheets::new(client, auth),
        }
    }
}

#[async_trait::async_trait]
impl SpreadsheetSource for SheetsHubSource {
    #[instrument(skip(self))]
    async fn worksheet_titles(
        &self,
        spreadsheet_id: &str,
    ) -> error_stack::Result<Vec<String>, ApiError> {
        let (_, spreadsheet) = self
            .hub
            .spreadsheets()
            .get(spreadsheet_id)
            .add_scope(google_sheets4::api::Scope::SpreadsheetReadonly)
            .doit()
            .await
            .change_context(ApiError::SpreadsheetMetadata)
            .attach_printable_lazy(|| format!("spreadsheet id {spreadsheet_id}"))?;

        let titles = spreadsheet
            .sheets
            .unwrap_or_default()
            .into_iter()
            .filter_map(|sheet| sheet.properties.and_then(|properties| properties.title))
            .collect();

        Ok(titles)
    }

    #[instrument(skip(self))]
    async fn range_values(
        &self,
        spreadsheet_id: &str,
        worksheet_title: &str,
        range: &str,
    ) -> error_stack::Result<Option<Vec<Vec<serde_json::Value>>>, ApiError> {
        let full_range = format!("'{worksheet_title}'!{range}");

        let (_, value_range) = self
            .hub
            .spreadsheets()
            .values_get(spreadsheet_id, &full_range)
            .add_scope(google_sheets4::api::Scope::SpreadsheetReadonly)
            .doit()
            .await
            .change_context(ApiError::WorksheetValues)
            .attach_printable_lazy(|| format!("range {full_range}"))?;

        Ok(value_range.values)
    }
}
