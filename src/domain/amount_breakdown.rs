use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};

use super::amount::{MonetaryAmount, DEFAULT_CURRENCY};
use super::errors::DomainError;
use super::money::Money;

/// A total together with the item subtotal and optional discount it is made of.
///
/// The breakdown is a plain container: setters never recompute `value`, and
/// `item_total`/`discount` are rendered in whatever currency they were built
/// with. Use [`AmountBreakdown::is_consistent`] to check the arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountBreakdown {
    money: Money,
    item_total: Money,
    discount: Option<Money>,
}

impl AmountBreakdown {
    /// Build a breakdown whose `item_total` equals `value` and has no discount.
    pub fn new(value: &str, currency_code: &str) -> Result<Self, DomainError> {
        let money = Money::of(value, currency_code)?;
        Ok(Self {
            item_total: money.clone(),
            money,
            discount: None,
        })
    }

    pub fn of(value: &str, currency_code: &str) -> Result<Self, DomainError> {
        Self::new(value, currency_code)
    }

    pub fn usd(value: &str) -> Result<Self, DomainError> {
        Self::new(value, DEFAULT_CURRENCY)
    }

    /// Replace the top-level value, keeping the currency chosen at construction.
    pub fn set_value(&mut self, value: &str) -> Result<(), DomainError> {
        self.money = Money::parse(value, self.money.currency().clone())?;
        Ok(())
    }

    pub fn item_total(&self) -> &Money {
        &self.item_total
    }

    pub fn set_item_total(&mut self, item_total: Money) {
        self.item_total = item_total;
    }

    pub fn has_discount(&self) -> bool {
        self.discount.is_some()
    }

    pub fn discount(&self) -> Option<&Money> {
        self.discount.as_ref()
    }

    pub fn get_discount(&self) -> Result<&Money, DomainError> {
        self.discount.as_ref().ok_or(DomainError::DiscountNotSet)
    }

    pub fn set_discount(&mut self, discount: Money) {
        self.discount = Some(discount);
    }

    /// Whether `value == item_total - discount` holds, with a missing discount
    /// counting as zero. Mixed currencies are never consistent.
    pub fn is_consistent(&self) -> bool {
        let zero = Money::zero(self.item_total.currency().clone());
        let discount = self.discount.as_ref().unwrap_or(&zero);
        matches!(self.item_total.minus(discount), Ok(expected) if expected == self.money)
    }
}

impl MonetaryAmount for AmountBreakdown {
    fn money(&self) -> &Money {
        &self.money
    }

    fn to_structured(&self) -> Value {
        let mut breakdown = json!({ "item_total": self.item_total.to_structured() });
        if let Some(discount) = &self.discount {
            breakdown["discount"] = discount.to_structured();
        }
        json!({
            "currency_code": self.currency_code(),
            "value": self.value(),
            "breakdown": breakdown,
        })
    }
}

impl Serialize for AmountBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_structured().serialize(serializer)
    }
}

#[derive(Deserialize)]
struct BreakdownBody {
    item_total: Money,
    #[serde(default)]
    discount: Option<Money>,
}

#[derive(Deserialize)]
struct AmountBreakdownBody {
    currency_code: String,
    value: String,
    #[serde(default)]
    breakdown: Option<BreakdownBody>,
}

impl<'de> Deserialize<'de> for AmountBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let body = AmountBreakdownBody::deserialize(deserializer)?;
        let mut amount =
            AmountBreakdown::of(&body.value, &body.currency_code).map_err(de::Error::custom)?;
        if let Some(breakdown) = body.breakdown {
            amount.item_total = breakdown.item_total;
            amount.discount = breakdown.discount;
        }
        Ok(amount)
    }
}
