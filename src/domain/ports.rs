use std::future::Future;

use crate::errors::ClientError;
use crate::requests::order_action::OrderActionRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait HttpTransport: Send + Sync + 'static {
    fn send(
        &self,
        request: &OrderActionRequest,
    ) -> impl Future<Output = Result<TransportResponse, ClientError>> + Send;
}
