pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infrastructure;
pub mod requests;

pub use application::orders_client::{OrderResponse, OrdersClient};
pub use config::ClientConfig;
pub use domain::amount::{Amount, MonetaryAmount};
pub use domain::amount_breakdown::AmountBreakdown;
pub use domain::currency::{Currency, CurrencyRegistry};
pub use domain::errors::DomainError;
pub use domain::money::Money;
pub use domain::ports::{HttpTransport, TransportResponse};
pub use errors::ClientError;
pub use infrastructure::reqwest_transport::ReqwestTransport;
pub use requests::order_action::{OrderAction, OrderActionRequest};

/// Build an `OrdersClient` backed by `reqwest` from environment configuration.
pub fn client_from_env() -> Result<OrdersClient<ReqwestTransport>, ClientError> {
    let config = ClientConfig::from_env()?;
    log::info!("Using payments API at {}", config.base_url);
    Ok(OrdersClient::new(ReqwestTransport::new(config)?))
}
