use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::ports::HttpTransport;
use crate::errors::ClientError;
use crate::requests::order_action::OrderActionRequest;

/// Order representation returned by an action; fields this crate does not
/// model are kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderResponse {
    pub fn to_pretty_json(&self) -> Result<String, ClientError> {
        serde_json::to_string_pretty(self).map_err(|e| ClientError::Encode(e.to_string()))
    }
}

pub struct OrdersClient<T> {
    transport: T,
}

impl<T: HttpTransport> OrdersClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn capture(&self, order_id: &str) -> Result<OrderResponse, ClientError> {
        self.execute(&OrderActionRequest::capture(order_id)?).await
    }

    pub async fn authorize(&self, order_id: &str) -> Result<OrderResponse, ClientError> {
        self.execute(&OrderActionRequest::authorize(order_id)?).await
    }

    pub async fn execute(&self, request: &OrderActionRequest) -> Result<OrderResponse, ClientError> {
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            log::warn!(
                "{} of order {} failed with status {}",
                request.action(),
                request.order_id(),
                response.status
            );
            return Err(ClientError::UnexpectedStatus {
                status: response.status,
                body: response.body,
            });
        }

        let order: OrderResponse = serde_json::from_str(&response.body)?;
        log::info!(
            "{} of order {} returned status {}",
            request.action(),
            order.id,
            order.status.as_deref().unwrap_or("unknown")
        );
        Ok(order)
    }
}
