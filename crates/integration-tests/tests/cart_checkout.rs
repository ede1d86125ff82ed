//! Integration tests for the session cart, service pages, and checkout.

use reqwest::StatusCode;

use homecraft_integration_tests::{GatewayMode, TestContext};

fn location(resp: &reqwest::Response) -> &str {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("Missing location header")
}

#[tokio::test]
async fn test_service_page_renders_gateway_details() {
    let ctx = TestContext::new(GatewayMode::Ok).await;
    ctx.signup("fred", "a long password").await;

    let resp = ctx
        .client
        .get(ctx.url("/service/flooring"))
        .send()
        .await
        .expect("Service request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Flooring"));
    assert!(body.contains("$100"));
}

#[tokio::test]
async fn test_unknown_service_is_not_found() {
    let ctx = TestContext::new(GatewayMode::Ok).await;
    ctx.signup("gina", "a long password").await;

    let resp = ctx
        .client
        .get(ctx.url("/service/painting"))
        .send()
        .await
        .expect("Service request failed");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_service_page_gateway_fault_notices_on_dashboard() {
    let ctx = TestContext::new(GatewayMode::FailStatus).await;
    ctx.signup("hana", "a long password").await;

    let resp = ctx
        .client
        .get(ctx.url("/service/roofing"))
        .send()
        .await
        .expect("Service request failed");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");

    let resp = ctx
        .client
        .get(ctx.url("/"))
        .send()
        .await
        .expect("Dashboard request failed");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Error fetching service details"));
}

#[tokio::test]
async fn test_cart_shows_total_and_discounted_total() {
    let ctx = TestContext::new(GatewayMode::Ok).await;
    ctx.signup("iris", "a long password").await;

    let resp = ctx.add_to_cart("Flooring", "100").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/cart");

    ctx.add_to_cart("Roofing", "50").await;

    let resp = ctx
        .client
        .get(ctx.url("/cart"))
        .send()
        .await
        .expect("Cart request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Flooring"));
    assert!(body.contains("Roofing"));
    assert!(body.contains("Total: $150"));
    assert!(body.contains("Discounted total: $143"));
}

#[tokio::test]
async fn test_cart_with_malformed_cost_is_unprocessable() {
    let ctx = TestContext::new(GatewayMode::Ok).await;
    ctx.signup("jack", "a long password").await;

    ctx.add_to_cart("Flooring", "ten").await;

    let resp = ctx
        .client
        .get(ctx.url("/cart"))
        .send()
        .await
        .expect("Cart request failed");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_place_order_success_clears_cart() {
    let ctx = TestContext::new(GatewayMode::Ok).await;
    ctx.signup("kate", "a long password").await;

    ctx.add_to_cart("Flooring", "100").await;
    ctx.add_to_cart("Roofing", "50").await;

    let resp = ctx
        .client
        .post(ctx.url("/place_order"))
        .send()
        .await
        .expect("Place order request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/orders");

    let resp = ctx
        .client
        .get(ctx.url("/orders"))
        .send()
        .await
        .expect("Orders request failed");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Order placed successfully!"));

    let resp = ctx
        .client
        .get(ctx.url("/cart"))
        .send()
        .await
        .expect("Cart request failed");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_place_order_failure_preserves_cart() {
    let ctx = TestContext::new(GatewayMode::FailStatus).await;
    ctx.signup("liam", "a long password").await;

    ctx.add_to_cart("Flooring", "100").await;
    ctx.add_to_cart("Roofing", "50").await;

    let resp = ctx
        .client
        .post(ctx.url("/place_order"))
        .send()
        .await
        .expect("Place order request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/index");

    let resp = ctx
        .client
        .get(ctx.url("/index"))
        .send()
        .await
        .expect("Landing request failed");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Error placing order"));

    // The cart survived the fault untouched.
    let resp = ctx
        .client
        .get(ctx.url("/cart"))
        .send()
        .await
        .expect("Cart request failed");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Flooring"));
    assert!(body.contains("Roofing"));
    assert!(body.contains("Total: $150"));
}
