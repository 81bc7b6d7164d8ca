//! Payment method selection for checkout.

use serde::{Deserialize, Serialize};

/// Payment method accepted at checkout.
///
/// The backend stores this as a plain string, so the serialized form
/// (`"credit"` / `"gift"`) is part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Credit card payment.
    #[default]
    Credit,
    /// Gift card payment.
    Gift,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Credit => write!(f, "credit"),
            Self::Gift => write!(f, "gift"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit" => Ok(Self::Credit),
            "gift" => Ok(Self::Gift),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_form_matches_wire_contract() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Credit).unwrap(),
            "\"credit\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Gift).unwrap(),
            "\"gift\""
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for method in [PaymentMethod::Credit, PaymentMethod::Gift] {
            let parsed: PaymentMethod = method.to_string().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("paypal".parse::<PaymentMethod>().is_err());
    }
}
