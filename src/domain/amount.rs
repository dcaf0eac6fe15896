use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::errors::DomainError;
use super::money::Money;

pub const DEFAULT_CURRENCY: &str = "USD";

/// Anything that carries a top-level currency and value and renders to the
/// payment API's JSON shape.
pub trait MonetaryAmount {
    fn money(&self) -> &Money;

    fn to_structured(&self) -> Value;

    fn currency_code(&self) -> &str {
        self.money().currency_code()
    }

    /// Exact decimal string at the currency scale, e.g. `"100.00"`.
    fn value(&self) -> String {
        self.money().to_plain_string()
    }

    fn to_json(&self) -> String {
        self.to_structured().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    money: Money,
}

impl Amount {
    pub fn new(value: &str, currency_code: &str) -> Result<Self, DomainError> {
        Ok(Self::from_money(Money::of(value, currency_code)?))
    }

    pub fn of(value: &str, currency_code: &str) -> Result<Self, DomainError> {
        Self::new(value, currency_code)
    }

    pub fn usd(value: &str) -> Result<Self, DomainError> {
        Self::new(value, DEFAULT_CURRENCY)
    }

    pub fn from_money(money: Money) -> Self {
        Self { money }
    }

    /// Replace the value, keeping the currency chosen at construction.
    pub fn set_value(&mut self, value: &str) -> Result<(), DomainError> {
        self.money = Money::parse(value, self.money.currency().clone())?;
        Ok(())
    }
}

impl MonetaryAmount for Amount {
    fn money(&self) -> &Money {
        &self.money
    }

    fn to_structured(&self) -> Value {
        self.money.to_structured()
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.money.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Money::deserialize(deserializer).map(Amount::from_money)
    }
}
