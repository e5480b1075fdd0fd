use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, GroceryItem};
use tower::{Service, ServiceExt};

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_items_empty() {
    let resp = app()
        .oneshot(empty_request("GET", "/groceryList"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<GroceryItem> = body_json(resp).await;
    assert!(items.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_item_returns_201_with_collection() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/groceryList",
            r#"{"name":"Milk","amount":1,"bought":false}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let items: Vec<GroceryItem> = body_json(resp).await;
    assert_eq!(
        items,
        vec![GroceryItem {
            id: 1,
            name: "Milk".to_string(),
            amount: 1,
            bought: false,
        }]
    );
}

#[tokio::test]
async fn create_item_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/groceryList", r#"{"not_name":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- update ---

#[tokio::test]
async fn update_item_not_found() {
    let resp = app()
        .oneshot(json_request("PATCH", "/groceryList/99", r#"{"amount":2}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_item_bad_id_returns_400() {
    let resp = app()
        .oneshot(json_request("PATCH", "/groceryList/milk", r#"{"amount":2}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_item_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/groceryList/1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    let mut app = app().into_service();

    // create two items
    for body in [
        r#"{"name":"Milk","amount":1,"bought":false}"#,
        r#"{"name":"Eggs","amount":6,"bought":false}"#,
    ] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request("POST", "/groceryList", body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // list keeps insertion order and sequential ids
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/groceryList"))
        .await
        .unwrap();
    let items: Vec<GroceryItem> = body_json(resp).await;
    assert_eq!(
        items.iter().map(|i| (i.id, i.name.as_str())).collect::<Vec<_>>(),
        vec![(1, "Milk"), (2, "Eggs")]
    );

    // partial update: only bought
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PATCH", "/groceryList/2", r#"{"bought":true}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<GroceryItem> = body_json(resp).await;
    assert_eq!(items[1].name, "Eggs"); // unchanged
    assert_eq!(items[1].amount, 6); // unchanged
    assert!(items[1].bought);

    // partial update: only name
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PATCH", "/groceryList/1", r#"{"name":"Oat milk"}"#))
        .await
        .unwrap();
    let items: Vec<GroceryItem> = body_json(resp).await;
    assert_eq!(items[0].name, "Oat milk");
    assert_eq!(items[0].amount, 1);

    // delete returns the remaining collection
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", "/groceryList/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<GroceryItem> = body_json(resp).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 2);

    // ids are not reused after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/groceryList", r#"{"name":"Tea"}"#))
        .await
        .unwrap();
    let items: Vec<GroceryItem> = body_json(resp).await;
    assert_eq!(items.last().map(|i| i.id), Some(3));

    // delete again is 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", "/groceryList/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
