//! Tests for HTTP request/response types.

use super::{HttpError, HttpRequest, HttpResponse};
use std::time::Duration;

fn test_url() -> url::Url {
    url::Url::parse("https://hooks.example.com/services/T/B/X").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn new_creates_bare_request() {
        let req = HttpRequest::new(http::Method::PUT, test_url());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, test_url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
        assert!(req.timeout.is_none());
    }

    #[test]
    fn post_creates_post_request() {
        let req = HttpRequest::post(test_url());

        assert_eq!(req.method, http::Method::POST);
    }

    #[test]
    fn with_body_sets_body() {
        let req = HttpRequest::post(test_url()).with_body(b"{}".to_vec());

        assert_eq!(req.body, Some(b"{}".to_vec()));
    }

    #[test]
    fn with_header_replaces_existing_value() {
        let req = HttpRequest::post(test_url())
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("text/plain"),
            )
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            );

        let values: Vec<_> = req
            .headers
            .get_all(http::header::CONTENT_TYPE)
            .iter()
            .collect();
        assert_eq!(values, vec!["application/json"]);
    }

    #[test]
    fn with_timeout_sets_timeout() {
        let req = HttpRequest::post(test_url()).with_timeout(Duration::from_secs(30));

        assert_eq!(req.timeout, Some(Duration::from_secs(30)));
    }
}

mod http_response {
    use super::*;

    #[test]
    fn is_success_covers_whole_2xx_range() {
        for code in [200_u16, 201, 204, 299] {
            let status = http::StatusCode::from_u16(code).unwrap();
            let resp = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(resp.is_success(), "Expected {code} to be success");
        }
    }

    #[test]
    fn is_success_rejects_everything_else() {
        for code in [199_u16, 300, 301, 400, 404, 429, 500, 503] {
            let status = http::StatusCode::from_u16(code).unwrap();
            let resp = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(!resp.is_success(), "Expected {code} to not be success");
        }
    }

    #[test]
    fn body_text_returns_utf8_body() {
        let resp = HttpResponse::new(
            http::StatusCode::NOT_FOUND,
            http::HeaderMap::new(),
            b"no_service".to_vec(),
        );

        assert_eq!(resp.body_text(), "no_service");
    }

    #[test]
    fn body_text_replaces_invalid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::BAD_REQUEST,
            http::HeaderMap::new(),
            vec![b'o', b'k', 0xFF],
        );

        assert_eq!(resp.body_text(), "ok\u{FFFD}");
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_preserves_source() {
        let error = HttpError::Connection(Box::new(std::io::Error::other("refused")));

        assert!(error.to_string().contains("Connection error"));
        assert!(error.source().unwrap().to_string().contains("refused"));
    }

    #[test]
    fn timeout_displays_message() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn invalid_url_displays_reason() {
        let error = HttpError::InvalidUrl("relative URL without a base".to_string());

        assert!(error.to_string().contains("Invalid URL"));
        assert!(error.to_string().contains("relative URL without a base"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}
