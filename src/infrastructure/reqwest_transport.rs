use crate::config::ClientConfig;
use crate::domain::ports::{HttpTransport, TransportResponse};
use crate::errors::ClientError;
use crate::requests::order_action::OrderActionRequest;

/// Sends order action requests with a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ReqwestTransport {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &OrderActionRequest) -> Result<TransportResponse, ClientError> {
        let url = request.url(&self.config.base_url);
        log::debug!("Sending {} {}", request.method(), url);

        let mut builder = self
            .client
            .request(request.method().clone(), &url)
            .headers(request.headers().clone());
        if let Some(token) = &self.config.access_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        log::debug!("{} {} returned {}", request.method(), url, status);

        Ok(TransportResponse { status, body })
    }
}
