//! Lending actions and the schemas published for them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::token::TokenRegistry;

/// One of the four Aave lending operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LendingAction {
    Supply,
    Borrow,
    Repay,
    Withdraw,
}

impl LendingAction {
    pub const ALL: [Self; 4] = [Self::Supply, Self::Borrow, Self::Repay, Self::Withdraw];

    /// Action name, also sent as the `transactionType`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Supply => "supply",
            Self::Borrow => "borrow",
            Self::Repay => "repay",
            Self::Withdraw => "withdraw",
        }
    }

    /// Verb used in `Failed to <verb>: ...` results.
    #[must_use]
    pub const fn failure_verb(self) -> &'static str {
        match self {
            Self::Supply => "deposit",
            Self::Borrow => "borrow",
            Self::Repay => "repay",
            Self::Withdraw => "redeem",
        }
    }

    /// Description published to the toolkit host.
    #[must_use]
    pub fn description(self, tokens: &TokenRegistry) -> String {
        let supported = tokens.supported_list();
        match self {
            Self::Supply => {
                "Supplies tokens into the market and receives aTokens in exchange.".to_string()
            }
            Self::Borrow => format!("Borrow tokens from Aave v3. Only support: {supported}."),
            Self::Repay => format!("Repay borrowed tokens to aave v3. Only support: {supported}."),
            Self::Withdraw => format!(
                "converts a specified quantity of aTokens into the underlying asset. Only support: {supported}."
            ),
        }
    }

    /// Payload schema published to the toolkit host.
    #[must_use]
    pub fn payload_schema(self, tokens: &TokenRegistry) -> BTreeMap<&'static str, PayloadField> {
        let supported = tokens.supported_list();
        let (symbol_subject, amount_description) = match self {
            Self::Supply => (
                "The symbol of the token you want to supply.",
                "The amount of the underlying asset to supply",
            ),
            Self::Borrow => (
                "The symbol of the token you want to borrow.",
                "The amount of the underlying asset to borrow",
            ),
            Self::Repay => (
                "The symbol of the underlying token you want to repay.",
                "The amount of the aTokens to repay",
            ),
            Self::Withdraw => (
                "The symbol of the token you want to withdraw.",
                "The amount of the underlying asset to withdraw",
            ),
        };

        let mut schema = BTreeMap::new();
        schema.insert(
            "tokenSymbol",
            PayloadField::required(
                FieldType::String,
                format!("{symbol_subject} Only support: {supported}."),
            ),
        );
        schema.insert(
            "amount",
            PayloadField::required(FieldType::Number, amount_description),
        );
        schema
    }

    /// Full definition for registration.
    #[must_use]
    pub fn spec(self, tokens: &TokenRegistry) -> ActionSpec {
        ActionSpec {
            name: self.name().to_string(),
            description: self.description(tokens),
            payload: self.payload_schema(tokens),
        }
    }
}

impl fmt::Display for LendingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LendingAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown action: {s}"))
    }
}

/// JSON type of a payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
}

/// Declared payload field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadField {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub description: String,
    pub required: bool,
}

impl PayloadField {
    pub fn required(field_type: FieldType, description: impl Into<String>) -> Self {
        Self {
            field_type,
            description: description.into(),
            required: true,
        }
    }
}

/// Name, description and payload schema of a registered action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionSpec {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub payload: BTreeMap<&'static str, PayloadField>,
}
