mod common;

use async_graphql::Variables;
use common::*;
use mockito::Matcher;
use serde_json::json;

const ADD_TRADING: &str = r#"
    mutation AddTrading($details: [TradingDetailInput]!) {
        addTrading(
            storeId: "s1",
            traderId: "t1",
            tradingType: "purchase",
            totalFund: 25.5,
            totalAmount: 2,
            tradingDetails: $details
        ) {
            id
            tradingType
            totalFund
            tradingDetails {
                productModelId
                purchasingPrice
                products { productId size amount }
            }
        }
    }
"#;

#[tokio::test]
async fn test_add_trading_forwards_nested_details() {
    let details = json!([
        {
            "productModelId": "pm1",
            "purchasingPrice": 12.75,
            "amount": 2,
            "products": [{"productId": "p1", "size": "M", "amount": 2}]
        }
    ]);

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/tradings")
        .match_body(Matcher::Json(json!({
            "id": "id-1",
            "storeId": "s1",
            "traderId": "t1",
            "tradingType": "purchase",
            "totalFund": 25.5,
            "totalAmount": 2,
            "tradingDetails": details
        })))
        .with_status(201)
        .with_body(
            json!({
                "id": "id-1",
                "storeId": "s1",
                "traderId": "t1",
                "tradingType": "purchase",
                "totalFund": 25.5,
                "totalAmount": 2,
                "tradingDetails": details
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let schema = test_schema(&server);

    let variables = Variables::from_json(json!({ "details": details }));
    let response = execute_graphql(&schema, ADD_TRADING, Some(variables)).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["addTrading"]["id"], "id-1");
    assert_eq!(data["addTrading"]["totalFund"], 25.5);
    assert_eq!(
        data["addTrading"]["tradingDetails"],
        json!([{
            "productModelId": "pm1",
            "purchasingPrice": 12.75,
            "products": [{"productId": "p1", "size": "M", "amount": 2}]
        }])
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_add_trading_requires_details() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let schema = test_schema(&server);

    let response = execute_graphql(
        &schema,
        r#"mutation { addTrading(storeId: "s1") { id } }"#,
        None,
    )
    .await;

    assert!(!response.errors.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_trading_query_maps_details() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_json(
        &mut server,
        "GET",
        "/tradings/tr1",
        200,
        json!({
            "id": "tr1",
            "status": "done",
            "tradingDetails": [{"productModelId": "pm1", "totalCost": 40.25}, null]
        }),
    )
    .await;
    let schema = test_schema(&server);

    let response = execute_graphql(
        &schema,
        r#"{ trading(id: "tr1") { id status tradingDetails { productModelId totalCost products { productId } } } }"#,
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(
        data["trading"]["tradingDetails"],
        json!([{"productModelId": "pm1", "totalCost": 40.25, "products": null}, null])
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_edit_trading_patches_supplied_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/tradings/tr1")
        .match_body(Matcher::Json(json!({"id": "tr1", "status": "cancelled"})))
        .with_status(200)
        .with_body(json!({"id": "tr1", "status": "cancelled", "tradingDetails": []}).to_string())
        .expect(1)
        .create_async()
        .await;
    let schema = test_schema(&server);

    let response = execute_graphql(
        &schema,
        r#"mutation { editTrading(id: "tr1", status: "cancelled") { id status tradingDetails { amount } } }"#,
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(
        data["editTrading"],
        json!({"id": "tr1", "status": "cancelled", "tradingDetails": []})
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_trading() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_json(
        &mut server,
        "DELETE",
        "/tradings/tr1",
        200,
        json!({"id": "tr1", "tradingDetails": []}),
    )
    .await;
    let schema = test_schema(&server);

    let response =
        execute_graphql(&schema, r#"mutation { deleteTrading(id: "tr1") { id } }"#, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_trading_with_empty_body_keeps_unselected_details() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_json(&mut server, "DELETE", "/tradings/tr1", 200, json!({})).await;
    let schema = test_schema(&server);

    let response = execute_graphql(
        &schema,
        r#"mutation { deleteTrading(id: "tr1") { id status } }"#,
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["deleteTrading"], json!({"id": null, "status": null}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_trading_without_details_fails_selected_details() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_json(&mut server, "GET", "/tradings/tr1", 200, json!({"id": "tr1"})).await;
    let schema = test_schema(&server);

    let response = execute_graphql(
        &schema,
        r#"{ trading(id: "tr1") { id tradingDetails { amount } } }"#,
        None,
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(
        response.errors[0].message,
        "Cannot return null for non-nullable field Trading.tradingDetails"
    );
    assert_eq!(
        serde_json::to_value(&response.errors[0].path).unwrap(),
        json!(["trading", "tradingDetails"])
    );
    let data = response.data.into_json().unwrap();
    assert!(data["trading"].is_null());
}
