mod common;

use common::*;
use infra::RestConfig;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_add_product_model_posts_arguments_with_new_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/productmodels")
        .match_body(Matcher::Json(json!({
            "id": "id-1",
            "storeId": "s1",
            "traderId": "t1",
            "costPrice": 10.5,
            "sellingPrice": 19.5
        })))
        .with_status(201)
        .with_body(
            json!({"id": "id-1", "storeId": "s1", "traderId": "t1", "costPrice": 10.5, "sellingPrice": 19.5})
                .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let schema = test_schema(&server);

    let response = execute_graphql(
        &schema,
        r#"mutation {
            addProductModel(storeId: "s1", traderId: "t1", costPrice: 10.5, sellingPrice: 19.5) {
                id storeId costPrice sellingPrice labelPrice
            }
        }"#,
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["addProductModel"]["id"], "id-1");
    assert_eq!(data["addProductModel"]["costPrice"], 10.5);
    assert!(data["addProductModel"]["labelPrice"].is_null());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_edit_product_model_uses_supplied_id_in_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/productmodels/pm1")
        .match_body(Matcher::Json(json!({
            "id": "pm1",
            "storeId": "s1",
            "type": "shirt",
            "disaccount": 0.5
        })))
        .with_status(200)
        .with_body(json!({"id": "pm1", "storeId": "s1", "type": "shirt", "disaccount": 0.5}).to_string())
        .expect(1)
        .create_async()
        .await;
    let schema = test_schema(&server);

    let response = execute_graphql(
        &schema,
        r#"mutation {
            editProductModel(id: "pm1", storeId: "s1", type: "shirt", disaccount: 0.5) {
                id type disaccount
            }
        }"#,
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(
        data["editProductModel"],
        json!({"id": "pm1", "type": "shirt", "disaccount": 0.5})
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_product_model_uses_same_collection() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_json(
        &mut server,
        "DELETE",
        "/productmodels/pm1",
        200,
        json!({"id": "pm1"}),
    )
    .await;
    let schema = test_schema(&server);

    let response = execute_graphql(
        &schema,
        r#"mutation { deleteProductModel(id: "pm1") { id } }"#,
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_product_model_with_empty_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_json(&mut server, "DELETE", "/productmodels/pm1", 200, json!({})).await;
    let schema = test_schema(&server);

    let response = execute_graphql(
        &schema,
        r#"mutation { deleteProductModel(id: "pm1") { storeId } }"#,
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["deleteProductModel"], json!({"storeId": null}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_collection_segment_can_be_overridden() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_json(
        &mut server,
        "DELETE",
        "/productModels/pm1",
        200,
        json!({"id": "pm1"}),
    )
    .await;
    let mut config = RestConfig::with_base_url(server.url());
    config.paths.product_models = "productModels".to_string();
    let schema = test_schema_with_config(config);

    let response = execute_graphql(
        &schema,
        r#"mutation { deleteProductModel(id: "pm1") { id } }"#,
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_edit_product_model_requires_store() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let schema = test_schema(&server);

    let response = execute_graphql(
        &schema,
        r#"mutation { editProductModel(id: "pm1", type: "shirt") { id } }"#,
        None,
    )
    .await;

    assert!(!response.errors.is_empty());
    mock.assert_async().await;
}
