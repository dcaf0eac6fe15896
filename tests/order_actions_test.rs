//! Drives `ReqwestTransport` against a local actix-web stub of the orders API.

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use checkout_orders::{
    AmountBreakdown, ClientConfig, ClientError, MonetaryAmount, Money, OrderActionRequest,
    OrdersClient, ReqwestTransport,
};
use serde_json::{json, Value};
use std::time::Duration;
use uuid::Uuid;

const ORDER_ID: &str = "1KC5501443316171H";

fn header(req: &HttpRequest, name: &str) -> String {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Echoes the order id and any JSON body back, but only when the JSON headers
/// were sent.
async fn capture(
    req: HttpRequest,
    path: web::Path<String>,
    body: Option<web::Json<Value>>,
) -> HttpResponse {
    if header(&req, "content-type") != "application/json"
        || header(&req, "prefer") != "return=representation"
    {
        return HttpResponse::BadRequest().json(json!({ "name": "MISSING_HEADERS" }));
    }
    HttpResponse::Ok().json(json!({
        "id": path.into_inner(),
        "status": "COMPLETED",
        "request_id": header(&req, "paypal-request-id"),
        "authorization": header(&req, "authorization"),
        "received": body.map(web::Json::into_inner),
    }))
}

async fn authorize() -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(json!({ "name": "UNPROCESSABLE_ENTITY" }))
}

/// Start the stub on an ephemeral port and return its base URL.
fn start_stub() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/v2/checkout/orders/{id}/capture", web::post().to(capture))
            .route("/v2/checkout/orders/{id}/authorize", web::post().to(authorize))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind stub server");

    let addr = server.addrs()[0];
    tokio::spawn(server.run());
    format!("http://{}", addr)
}

fn client_for(base_url: String, access_token: Option<&str>) -> OrdersClient<ReqwestTransport> {
    let config = ClientConfig {
        base_url,
        timeout: Duration::from_secs(5),
        access_token: access_token.map(str::to_string),
    };
    OrdersClient::new(ReqwestTransport::new(config).expect("Failed to build transport"))
}

#[tokio::test]
async fn capture_round_trips_through_http() {
    let client = client_for(start_stub(), None);

    let order = client.capture(ORDER_ID).await.expect("capture should succeed");

    assert_eq!(order.id, ORDER_ID);
    assert_eq!(order.status.as_deref(), Some("COMPLETED"));
    assert_eq!(order.extra["received"], Value::Null);
}

#[tokio::test]
async fn request_id_and_token_reach_the_server() {
    let client = client_for(start_stub(), Some("sandbox-token"));
    let request_id = Uuid::new_v4().to_string();
    let request = OrderActionRequest::capture(ORDER_ID)
        .unwrap()
        .with_request_id(&request_id)
        .unwrap();

    let order = client.execute(&request).await.expect("capture should succeed");

    assert_eq!(order.extra["request_id"], request_id);
    assert_eq!(order.extra["authorization"], "Bearer sandbox-token");
}

#[tokio::test]
async fn capture_body_carries_amount_breakdown() {
    let client = client_for(start_stub(), None);
    let mut amount = AmountBreakdown::of("100.00", "USD").unwrap();
    amount.set_item_total(Money::of("150", "USD").unwrap());
    amount.set_discount(Money::of("50", "USD").unwrap());
    let request = OrderActionRequest::capture(ORDER_ID)
        .unwrap()
        .with_body(json!({ "amount": amount.to_structured() }));

    let order = client.execute(&request).await.expect("capture should succeed");

    assert_eq!(order.id, ORDER_ID);
    assert_eq!(
        order.extra["received"],
        json!({
            "amount": {
                "currency_code": "USD",
                "value": "100.00",
                "breakdown": {
                    "item_total": { "currency_code": "USD", "value": "150.00" },
                    "discount": { "currency_code": "USD", "value": "50.00" }
                }
            }
        })
    );
}

#[tokio::test]
async fn error_status_surfaces_body() {
    let client = client_for(start_stub(), None);

    let err = client.authorize(ORDER_ID).await.unwrap_err();

    match err {
        ClientError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 422);
            assert!(body.contains("UNPROCESSABLE_ENTITY"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Port 9 (discard) is not expected to accept HTTP connections locally.
    let client = client_for("http://127.0.0.1:9".to_string(), None);

    let err = client.capture(ORDER_ID).await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}
