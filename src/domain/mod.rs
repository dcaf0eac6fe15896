pub mod amount;
pub mod amount_breakdown;
pub mod currency;
pub mod errors;
pub mod money;
pub mod ports;
