//! Account balance model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Net total of an account's transactions in one currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Currency code
    pub currency: String,
    /// Received minus sent
    pub amount: Decimal,
}

impl AccountBalance {
    pub fn new(currency: impl Into<String>, amount: Decimal) -> Self {
        Self {
            currency: currency.into(),
            amount,
        }
    }
}

impl fmt::Display for AccountBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
