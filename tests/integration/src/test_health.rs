//! Health and routing integration tests.

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::{client, url};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_report_running() {
        for path in ["/health", "/_health"] {
            let resp = client().get(url(path)).send().await.expect("health");
            assert_eq!(resp.status(), 200, "path {path}");
            let body: Value = resp.json().await.expect("health json");
            assert_eq!(body["status"], "running");
            assert!(body["version"].is_string());
        }
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_answer_unknown_routes() {
        let resp = client().get(url("/authors")).send().await.expect("get");
        assert_eq!(resp.status(), 404);
        let body: Value = resp.json().await.expect("error json");
        assert_eq!(body["error"], "Not found");

        let resp = client().patch(url("/books")).send().await.expect("patch");
        assert_eq!(resp.status(), 405);
        let body: Value = resp.json().await.expect("error json");
        assert_eq!(body["error"], "Method not allowed");
    }
}
