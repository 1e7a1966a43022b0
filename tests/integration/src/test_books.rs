//! Book CRUD integration tests.

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::{cleanup_book, client, create_book, unique_book, url};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_run_book_lifecycle() {
        let client = client();
        let body = unique_book("lifecycle");
        let created = create_book(&client, &body).await.expect("create book");
        let id = created["id"].clone();
        assert_eq!(created["title"], body["title"]);
        assert!(created["created_at"].is_string());

        let fetched: Value = client
            .get(url(&format!("/books/{id}")))
            .send()
            .await
            .expect("get book")
            .json()
            .await
            .expect("book json");
        assert_eq!(fetched, created);

        let resp = client
            .put(url(&format!("/books/{id}")))
            .json(&json!({ "title": "Renamed", "author": "Someone Else", "year": 1999 }))
            .send()
            .await
            .expect("update book");
        assert_eq!(resp.status(), 200);
        let updated: Value = resp.json().await.expect("updated json");
        assert_eq!(updated["id"], id);
        assert_eq!(updated["title"], "Renamed");
        assert_eq!(updated["year"], 1999);

        let listed: Vec<Value> = client
            .get(url("/books"))
            .send()
            .await
            .expect("list books")
            .json()
            .await
            .expect("list json");
        assert!(listed.iter().any(|b| b["id"] == id));

        let resp = client
            .delete(url(&format!("/books/{id}")))
            .send()
            .await
            .expect("delete book");
        assert_eq!(resp.status(), 200);
        let deleted: Value = resp.json().await.expect("delete json");
        assert_eq!(deleted, json!({ "success": "Record deleted" }));

        let resp = client
            .get(url(&format!("/books/{id}")))
            .send()
            .await
            .expect("get deleted book");
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_incomplete_book() {
        let client = client();
        let resp = client
            .post(url("/books"))
            .json(&json!({ "title": "No Author", "year": 2000 }))
            .send()
            .await
            .expect("post book");
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.expect("error json");
        assert_eq!(body["error"], "Title, Author, and Year are required");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_invalid_json() {
        let client = client();
        let resp = client
            .post(url("/books"))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .expect("post book");
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.expect("error json");
        assert_eq!(body["error"], "Invalid JSON input");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_not_found_for_unknown_ids() {
        let client = client();
        for path in ["/books/999999999", "/books/abc"] {
            let resp = client.get(url(path)).send().await.expect("get book");
            assert_eq!(resp.status(), 404, "path {path}");
            let body: Value = resp.json().await.expect("error json");
            assert_eq!(body["error"], "Record not found");
        }
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_keep_book_on_rejected_update() {
        let client = client();
        let created = create_book(&client, &unique_book("keep")).await.expect("create book");
        let id = created["id"].clone();

        let resp = client
            .put(url(&format!("/books/{id}")))
            .json(&json!({ "title": "", "author": "", "year": 0 }))
            .send()
            .await
            .expect("update book");
        assert_eq!(resp.status(), 400);

        let fetched: Value = client
            .get(url(&format!("/books/{id}")))
            .send()
            .await
            .expect("get book")
            .json()
            .await
            .expect("book json");
        assert_eq!(fetched, created);

        cleanup_book(&client, &id).await;
    }
}
