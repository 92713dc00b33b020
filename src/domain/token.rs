//! Token symbol to contract address resolution.
//!
//! The table is read-only after construction and shared between action
//! handlers behind an `Arc`.

use serde::{Deserialize, Serialize};

/// Built-in table for the Aave v3 market on Ethereum Sepolia.
const SEPOLIA_TOKENS: [(&str, &str); 9] = [
    ("USDC", "0x94a9D9AC8a22534E3FaCa9F4e7F2E2cf85d5E4C8"),
    ("LINK", "0xf8Fb3713D459D7C1018BD0A49D19b4C44290EBE5"),
    ("USDT", "0xaA8E23Fb1079EA71e0a56F48a2aA51851D8433D0"),
    ("DAI", "0xFF34B3d4Aee8ddCd6F9AFFFB6Fe49bD371b8a357"),
    ("WETH", "0xC558DBdd856501FCd9aaF1E62eae57A9F0629a3c"),
    ("WBTC", "0x29f2D40B0605204364af54EC677bD022dA425d03"),
    ("AAVE", "0x88541670E55cC00bEEFD87eB59EDd1b7C511AC9a"),
    ("EURS", "0x6d906e526a4e2Ca02097BA9d0caA3c382F52278E"),
    ("GHO", "0xc4bF5CbDaBE595361438F8c6a187bDc330539c60"),
];

/// A supported token and its contract address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String,
    pub address: String,
}

impl Token {
    pub fn new(symbol: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            address: address.into(),
        }
    }
}

/// Ordered, case-insensitive token lookup.
///
/// Symbols are stored upper-cased. Order is preserved so that published
/// descriptions list tokens the way they were configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRegistry {
    tokens: Vec<Token>,
}

impl TokenRegistry {
    /// Build a registry from tokens, upper-casing every symbol.
    ///
    /// Callers are responsible for rejecting duplicates beforehand; on
    /// duplicates the first entry wins.
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        let tokens = tokens
            .into_iter()
            .map(|token| Token::new(token.symbol.trim().to_uppercase(), token.address))
            .collect();
        Self { tokens }
    }

    /// The nine-token Sepolia table.
    #[must_use]
    pub fn sepolia() -> Self {
        Self::new(
            SEPOLIA_TOKENS
                .iter()
                .map(|(symbol, address)| Token::new(*symbol, *address)),
        )
    }

    /// Resolve a symbol to its contract address.
    ///
    /// Returns `None` for symbols not in the table.
    #[must_use]
    pub fn resolve(&self, symbol: &str) -> Option<&str> {
        let wanted = symbol.to_uppercase();
        self.tokens
            .iter()
            .find(|token| token.symbol == wanted)
            .map(|token| token.address.as_str())
    }

    #[must_use]
    pub fn symbols(&self) -> Vec<&str> {
        self.tokens.iter().map(|token| token.symbol.as_str()).collect()
    }

    /// Comma-separated symbol list used in action descriptions.
    #[must_use]
    pub fn supported_list(&self) -> String {
        self.symbols().join(", ")
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::sepolia()
    }
}
