use std::time::Duration;

use reqwest::Client;

use super::error::FetchError;

/// Identifies the watcher to the game's web server.
const USER_AGENT: &str = concat!("jobwatch/", env!("CARGO_PKG_VERSION"));

/// Fetches the two source pages over HTTP.
///
/// Both endpoints are fixed at construction (useful for testing against a
/// local server). Requests carry a descriptive client identifier and a
/// no-cache directive.
pub struct PageClient {
    client: Client,
    online_url: String,
    ranking_url: String,
}

impl PageClient {
    pub fn new(online_url: String, ranking_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            online_url,
            ranking_url,
        }
    }

    /// The "currently online" roster page.
    pub async fn fetch_online(&self) -> Result<String, FetchError> {
        self.fetch(&self.online_url).await
    }

    /// The top-100 ranking page.
    pub async fn fetch_ranking(&self) -> Result<String, FetchError> {
        self.fetch(&self.ranking_url).await
    }

    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Cache-Control", "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> PageClient {
        PageClient::new(
            format!("{}/online", server.uri()),
            format!("{}/ranking", server.uri()),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn fetch_online_returns_the_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/online"))
            .and(header("Cache-Control", "no-cache"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(1)
            .mount(&server)
            .await;

        let html = client(&server).fetch_online().await.unwrap();
        assert_eq!(html, "<html></html>");
    }

    #[tokio::test]
    async fn fetch_ranking_hits_the_ranking_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ranking"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).fetch_ranking().await.unwrap();
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/online"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client(&server).fetch_online().await.unwrap_err();
        match err {
            FetchError::HttpStatus { status, .. } => assert_eq!(status, 503),
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn connection_failure_is_a_network_error() {
        // Nothing listens on this port.
        let client = PageClient::new(
            "http://127.0.0.1:9".into(),
            "http://127.0.0.1:9".into(),
            Duration::from_secs(1),
        );
        let err = client.fetch_online().await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
