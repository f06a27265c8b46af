use super::ApiError;

#[async_trait::async_trait]
pub trait SpreadsheetSource: Send + Sync {
    /// Titles of every worksheet in the spreadsheet, in document order.
    async fn worksheet_titles(
        &self,
        spreadsheet_id: &str,
    ) -> error_stack::Result<Vec<String>, ApiError>;

    /// Values of `'<worksheet_title>'!<range>`. `None` when the worksheet
    /// has no values in the range.
    async fn range_values(
        &self,
        spreadsheet_id: &str,
        worksheet_title: &str,
        range: &str,
    ) -> error_stack::Result<Option<Vec<Vec<serde_json::Value>>>, ApiError>;
}
