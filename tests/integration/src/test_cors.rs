//! CORS integration tests.

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use crate::{client, url};

    const ALLOWED_ORIGIN: &str = "http://localhost:3000";

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_answer_preflight_for_allowed_origin() {
        let resp = client()
            .request(Method::OPTIONS, url("/books"))
            .header("origin", ALLOWED_ORIGIN)
            .header("access-control-request-method", "POST")
            .send()
            .await
            .expect("preflight");
        assert_eq!(resp.status(), 204);
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some(ALLOWED_ORIGIN)
        );
        let methods = resp
            .headers()
            .get("access-control-allow-methods")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(methods.contains("DELETE"), "{methods}");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_preflight_for_unknown_origin() {
        let resp = client()
            .request(Method::OPTIONS, url("/books"))
            .header("origin", "https://not-allowed.example")
            .send()
            .await
            .expect("preflight");
        assert_eq!(resp.status(), 403);
        assert!(resp.headers().get("access-control-allow-origin").is_none());
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_echo_origin_on_regular_requests() {
        let resp = client()
            .get(url("/books"))
            .header("origin", ALLOWED_ORIGIN)
            .send()
            .await
            .expect("list books");
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some(ALLOWED_ORIGIN)
        );
        assert!(resp.headers().contains_key("x-request-id"));
    }
}
