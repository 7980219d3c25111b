//! Tests for `ReqwestClient`.
//!
//! Request behaviour against real servers is left to reqwest; these cover
//! construction and error classification.

use super::*;

mod reqwest_client {
    use super::*;

    #[test]
    fn default_creates_client() {
        let client = ReqwestClient::default();

        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();
        let client = ReqwestClient::from_client(custom);

        let debug = format!("{client:?}");
        assert!(debug.contains("ReqwestClient"));
        assert!(debug.contains("5s"));
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }

    #[tokio::test]
    async fn request_to_invalid_host_returns_error_or_proxy_response() {
        let client = ReqwestClient::new();
        let url = url::Url::parse("http://invalid.invalid.invalid/").unwrap();
        let req = HttpRequest::post(url)
            .with_body(b"{}".to_vec())
            .with_timeout(std::time::Duration::from_secs(10));

        let result = client.request(req).await;

        // A proxy in the environment may answer with its own error status.
        match result {
            Err(HttpError::Connection(_) | HttpError::Timeout) => {}
            Ok(resp) if !resp.is_success() => {}
            other => panic!("Expected transport error or proxy error response, got {other:?}"),
        }
    }
}
