use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use std::fmt;

use crate::domain::errors::DomainError;

pub const ORDERS_PATH: &str = "/v2/checkout/orders";
pub const PREFER: HeaderName = HeaderName::from_static("prefer");
pub const PAYPAL_REQUEST_ID: HeaderName = HeaderName::from_static("paypal-request-id");
pub const MAX_REQUEST_ID_LEN: usize = 108;

/// Side-effecting actions that share the `POST /orders/{id}/<action>` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Capture,
    Authorize,
}

impl OrderAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderAction::Capture => "capture",
            OrderAction::Authorize => "authorize",
        }
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ready-to-send request for one action on an existing order.
///
/// Building it performs no I/O; hand it to an `HttpTransport` to send.
#[derive(Debug, Clone)]
pub struct OrderActionRequest {
    order_id: String,
    action: OrderAction,
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<Value>,
}

impl OrderActionRequest {
    pub fn new(order_id: &str, action: OrderAction) -> Result<Self, DomainError> {
        validate_order_id(order_id)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(PREFER, HeaderValue::from_static("return=representation"));

        let path = format!("{ORDERS_PATH}/{order_id}/{action}");
        log::debug!("Built {} request for order {}: POST {}", action, order_id, path);

        Ok(Self {
            order_id: order_id.to_string(),
            action,
            method: Method::POST,
            path,
            headers,
            body: None,
        })
    }

    pub fn capture(order_id: &str) -> Result<Self, DomainError> {
        Self::new(order_id, OrderAction::Capture)
    }

    pub fn authorize(order_id: &str) -> Result<Self, DomainError> {
        Self::new(order_id, OrderAction::Authorize)
    }

    /// Attach an idempotency key so the API can deduplicate retried sends.
    /// The key must be 1 to 108 visible ASCII characters.
    pub fn with_request_id(mut self, request_id: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidRequestId(request_id.to_string());
        if request_id.is_empty()
            || request_id.len() > MAX_REQUEST_ID_LEN
            || !request_id.bytes().all(|b| b.is_ascii_graphic())
        {
            return Err(invalid());
        }
        let value = HeaderValue::from_str(request_id).map_err(|_| invalid())?;
        self.headers.insert(PAYPAL_REQUEST_ID, value);
        Ok(self)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn action(&self) -> OrderAction {
        self.action
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header value as a string, `None` when absent or not visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

// Ids are embedded verbatim in the path, so only URL-safe characters pass.
fn validate_order_id(order_id: &str) -> Result<(), DomainError> {
    let valid = !order_id.is_empty()
        && order_id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidOrderId(order_id.to_string()))
    }
}
