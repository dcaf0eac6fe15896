use bigdecimal::BigDecimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

use super::currency::{Currency, CurrencyRegistry};
use super::errors::DomainError;

/// An exact decimal amount in a recognised currency, held at the currency's
/// minor-unit scale (`"150"` USD is stored and rendered as `150.00`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    amount: BigDecimal,
    currency: Currency,
}

impl Money {
    /// Parse `value` as an amount of `currency_code` using the ISO 4217 registry.
    pub fn of(value: &str, currency_code: &str) -> Result<Self, DomainError> {
        Self::of_in(value, currency_code, CurrencyRegistry::iso4217())
    }

    /// Same as [`Money::of`], resolving the currency in `registry`.
    pub fn of_in(
        value: &str,
        currency_code: &str,
        registry: &CurrencyRegistry,
    ) -> Result<Self, DomainError> {
        let currency = registry.lookup(currency_code)?;
        Self::parse(value, currency)
    }

    /// Parse `value` in an already resolved currency.
    pub fn parse(value: &str, currency: Currency) -> Result<Self, DomainError> {
        if !is_decimal_literal(value) {
            return Err(DomainError::InvalidDecimal(value.to_string()));
        }
        let amount = BigDecimal::from_str(value.strip_prefix('+').unwrap_or(value))
            .map_err(|e| DomainError::InvalidDecimal(format!("{value}: {e}")))?;
        Self::from_decimal(amount, currency)
    }

    /// Wrap an existing decimal, rescaling it to the currency's minor unit.
    /// Fails when that would drop non-zero digits.
    pub fn from_decimal(amount: BigDecimal, currency: Currency) -> Result<Self, DomainError> {
        let scaled = amount.with_scale(i64::from(currency.fraction_digits()));
        if scaled != amount {
            return Err(DomainError::InvalidDecimal(format!(
                "{} has more than {} fraction digits for {}",
                amount,
                currency.fraction_digits(),
                currency
            )));
        }
        Ok(Self {
            amount: scaled,
            currency,
        })
    }

    pub fn zero(currency: Currency) -> Self {
        let amount = BigDecimal::from(0).with_scale(i64::from(currency.fraction_digits()));
        Self { amount, currency }
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn currency_code(&self) -> &str {
        self.currency.code()
    }

    /// Exact rendering at the currency scale, trailing zeros included.
    pub fn to_plain_string(&self) -> String {
        self.amount.to_plain_string()
    }

    pub fn minus(&self, other: &Money) -> Result<Money, DomainError> {
        self.check_same_currency(other)?;
        Ok(Self {
            amount: &self.amount - &other.amount,
            currency: self.currency.clone(),
        })
    }

    /// `{currency_code, value}` mapping used on the wire for every money field.
    pub fn to_structured(&self) -> Value {
        json!({
            "currency_code": self.currency_code(),
            "value": self.to_plain_string(),
        })
    }

    fn check_same_currency(&self, other: &Money) -> Result<(), DomainError> {
        if self.currency != other.currency {
            return Err(DomainError::CurrencyMismatch {
                expected: self.currency_code().to_string(),
                found: other.currency_code().to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_structured().serialize(serializer)
    }
}

#[derive(Deserialize)]
struct MoneyBody {
    currency_code: String,
    value: String,
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let body = MoneyBody::deserialize(deserializer)?;
        Money::of(&body.value, &body.currency_code).map_err(de::Error::custom)
    }
}

/// Optional sign, one or more digits, then optionally `.` and one or more digits.
fn is_decimal_literal(value: &str) -> bool {
    let unsigned = value
        .strip_prefix(|c: char| c == '-' || c == '+')
        .unwrap_or(value);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(integer) && fraction.map_or(true, all_digits)
}
