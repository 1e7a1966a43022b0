//! URL cleaning integration tests.

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::{client, url};

    async fn clean(path: &str, body: Value) -> (u16, Value) {
        let resp = client()
            .post(url(path))
            .json(&body)
            .send()
            .await
            .expect("post clean-url");
        let status = resp.status().as_u16();
        (status, resp.json().await.expect("clean-url json"))
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_apply_each_operation() {
        let cases = [
            (
                "https://byfood.com/path/with/query?ref=123/",
                "canonical",
                "https://byfood.com/path/with/query",
            ),
            (
                "https://BYFOOD.com/Food-EXPeriences",
                "redirection",
                "https://www.byfood.com/food-experiences",
            ),
            (
                "https://BYFOOD.com/food-EXPeriences?query=abc/",
                "all",
                "https://www.byfood.com/food-experiences",
            ),
        ];
        for (input, operation, expected) in cases {
            let (status, body) =
                clean("/clean-url", json!({ "url": input, "operation": operation })).await;
            assert_eq!(status, 200, "{operation} {input}");
            assert_eq!(body, json!({ "processed_url": expected }));
        }
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_accept_underscore_alias() {
        let (status, body) = clean(
            "/clean_url",
            json!({ "url": "https://byfood.com/a/", "operation": "canonical" }),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(body["processed_url"], "https://byfood.com/a");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_bad_input() {
        for body in [
            json!({ "url": "invalid-url", "operation": "canonical" }),
            json!({ "url": "https://byfood.com", "operation": "shorten" }),
            json!({ "url": "https://byfood.com" }),
        ] {
            let (status, resp) = clean("/clean-url", body.clone()).await;
            assert_eq!(status, 400, "body {body}");
            let message = resp["error"].as_str().expect("error message");
            assert!(message.starts_with("Invalid input: "), "{message}");
        }
    }
}
