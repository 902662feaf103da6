//! Catalog client - fetches and decodes one page of catalog results.

use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::Config;

use super::error::RetrievalError;
use super::model::CatalogPage;

/// Issues one paginated request to the remote catalog.
///
/// The client never retries internally; retry policy, if any, belongs to
/// the caller. The underlying HTTP client is shared with the tile fetcher
/// for connection pooling.
#[derive(Debug, Clone)]
pub struct CatalogClient<'cfg> {
    http: Client,
    config: &'cfg Config,
}

impl<'cfg> CatalogClient<'cfg> {
    /// Creates a catalog client over a shared HTTP client and configuration.
    #[must_use]
    pub fn new(http: Client, config: &'cfg Config) -> Self {
        Self { http, config }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &'cfg Config {
        self.config
    }

    /// Fetches and decodes one page of catalog results.
    ///
    /// Sends the API key, the optional quoted search filter, the requested
    /// 1-based page number, and the configured page size as query
    /// parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError`] on any transport failure, non-success
    /// status, or undecodable response body.
    #[instrument(skip(self), fields(page = page_number))]
    pub async fn fetch_page(&self, page_number: u32) -> Result<CatalogPage, RetrievalError> {
        let url = format!("{}/media", self.config.catalog_base_url);

        let mut query: Vec<(&str, String)> = vec![
            ("apiKey", self.config.api_key.clone()),
            ("page", page_number.to_string()),
            ("rows", self.config.page_size.to_string()),
        ];
        if let Some(filter) = &self.config.search_filter {
            query.push((
                "fq[]",
                format!("search_s_digitized_publication:\"{filter}\""),
            ));
        }

        debug!(%url, "fetching catalog page");

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| RetrievalError::request(page_number, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::http_status(page_number, status.as_u16()));
        }

        let page = response
            .json::<CatalogPage>()
            .await
            .map_err(|e| RetrievalError::decode(page_number, e))?;

        debug!(
            items = page.media.len(),
            total_pages = page.pagination.pages,
            "decoded catalog page"
        );
        Ok(page)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::http::build_http_client;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn catalog_json(items: u32, page: u32, pages: u32) -> serde_json::Value {
        let media: Vec<serde_json::Value> = (0..items)
            .map(|i| {
                serde_json::json!({
                    "title": format!("Book {i}"),
                    "asset": [{"uuid": format!("uuid-{i}"), "width": 300, "height": 260}]
                })
            })
            .collect();
        serde_json::json!({
            "media": media,
            "pagination": {"page": page, "pages": pages}
        })
    }

    fn test_config(base_url: String) -> Config {
        Config::new("test-key", ".")
            .with_search_filter("Ja")
            .with_catalog_base_url(base_url)
    }

    #[tokio::test]
    async fn test_fetch_page_sends_expected_query_params() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/media"))
            .and(query_param("apiKey", "test-key"))
            .and(query_param("page", "2"))
            .and(query_param("rows", "25"))
            .and(query_param(
                "fq[]",
                "search_s_digitized_publication:\"Ja\"",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(catalog_json(3, 2, 4)))
            .expect(1)
            .mount(&server)
            .await;

        let config = test_config(server.uri());
        let client = CatalogClient::new(build_http_client().unwrap(), &config);
        let page = client.fetch_page(2).await.unwrap();

        assert_eq!(page.media.len(), 3);
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.pages, 4);
    }

    #[tokio::test]
    async fn test_fetch_page_without_filter_omits_fq_param() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/media"))
            .and(query_param("apiKey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(catalog_json(1, 1, 1)))
            .mount(&server)
            .await;

        let config = Config::new("test-key", ".").with_catalog_base_url(server.uri());
        let client = CatalogClient::new(build_http_client().unwrap(), &config);
        let page = client.fetch_page(1).await.unwrap();

        assert_eq!(page.media.len(), 1);
        let requests = server.received_requests().await.unwrap();
        assert!(
            requests
                .iter()
                .all(|r| !r.url.query().unwrap_or("").contains("fq")),
            "no fq[] param expected when filter is unset"
        );
    }

    #[tokio::test]
    async fn test_fetch_page_http_error_maps_to_retrieval_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/media"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let config = test_config(server.uri());
        let client = CatalogClient::new(build_http_client().unwrap(), &config);
        let err = client.fetch_page(1).await.unwrap_err();

        assert!(
            matches!(err, RetrievalError::HttpStatus { page: 1, status: 503 }),
            "expected HttpStatus, got: {err:?}"
        );
    }

    #[tokio::test]
    async fn test_fetch_page_malformed_body_maps_to_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/media"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("not json at all")
                    .insert_header("content-type", "application/json"),
            )
            .mount(&server)
            .await;

        let config = test_config(server.uri());
        let client = CatalogClient::new(build_http_client().unwrap(), &config);
        let err = client.fetch_page(1).await.unwrap_err();

        assert!(
            matches!(err, RetrievalError::Decode { page: 1, .. }),
            "expected Decode, got: {err:?}"
        );
    }
}
