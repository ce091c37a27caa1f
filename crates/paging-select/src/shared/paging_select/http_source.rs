use super::error::FetchError;
use super::traits::OptionSource;
use crate::shared::api_utils::api_url;
use contracts::shared::paging_select::{FetchPageArgs, OptionRecord, PageResponse};
use gloo_net::http::Request;

/// Источник опций по HTTP
///
/// `GET {path}?page=..&limit=..&relatedKey=..&_ts=..`, ответ `{ "list": [...], "total": N }`.
#[derive(Debug, Clone)]
pub struct HttpOptionSource {
    path: String,
}

impl HttpOptionSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Query string страницы с cache buster в конце
pub fn page_query(args: &FetchPageArgs, cache_buster: i64) -> Result<String, FetchError> {
    let query = serde_qs::to_string(args)?;
    Ok(format!("{}&_ts={}", query, cache_buster))
}

impl OptionSource<OptionRecord> for HttpOptionSource {
    async fn fetch_page(
        &self,
        args: FetchPageArgs,
    ) -> Result<PageResponse<OptionRecord>, FetchError> {
        let cache_buster = js_sys::Date::now() as i64;
        let url = format!("{}?{}", api_url(&self.path), page_query(&args, cache_buster)?);

        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, must-revalidate")
            .header("Pragma", "no-cache")
            .send()
            .await?;
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }
        Ok(response.json::<PageResponse<OptionRecord>>().await?)
    }
}
