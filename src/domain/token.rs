//! Token metadata loaded from a chain's token mapping.

use std::collections::HashMap;

use serde::Deserialize;

/// A single ERC-20 token known to the relayer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Token {
    pub name: String,
    pub ticker: String,
    pub address: String,
    pub decimals: u8,
}

/// Wire shape of a token mapping document.
#[derive(Debug, Deserialize)]
pub struct TokenMappingDocument {
    pub tokens: Vec<Token>,
}

/// Token lookup table keyed by lower-cased contract address.
#[derive(Debug, Clone, Default)]
pub struct TokenMap {
    tokens: Vec<Token>,
    by_address: HashMap<String, usize>,
}

impl TokenMap {
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        let by_address = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| (token.address.to_ascii_lowercase(), i))
            .collect();
        Self { tokens, by_address }
    }

    /// Find a token by contract address, ignoring hex case.
    #[must_use]
    pub fn find_by_address(&self, address: &str) -> Option<&Token> {
        self.by_address
            .get(&address.to_ascii_lowercase())
            .map(|&i| &self.tokens[i])
    }

    /// Ticker for `address`, or a shortened address when unknown.
    #[must_use]
    pub fn ticker(&self, address: &str) -> String {
        match self.find_by_address(address) {
            Some(token) => token.ticker.clone(),
            None => shorten_address(address),
        }
    }

    /// Render a base-unit amount using the token's decimals.
    ///
    /// Unknown tokens are printed in base units.
    #[must_use]
    pub fn format_amount(&self, address: &str, amount: u128) -> String {
        let decimals = self.find_by_address(address).map_or(0, |t| t.decimals);
        format_units(amount, decimals)
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

impl From<TokenMappingDocument> for TokenMap {
    fn from(doc: TokenMappingDocument) -> Self {
        Self::new(doc.tokens)
    }
}

/// Format a base-unit integer as a decimal string, trimming trailing zeros.
#[must_use]
pub fn format_units(amount: u128, decimals: u8) -> String {
    if decimals == 0 {
        return amount.to_string();
    }
    let digits = amount.to_string();
    let decimals = usize::from(decimals);
    let padded = if digits.len() <= decimals {
        format!("{}{digits}", "0".repeat(decimals - digits.len() + 1))
    } else {
        digits
    };
    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    }
}

fn shorten_address(address: &str) -> String {
    if address.len() <= 12 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}…{}", &address[..6], &address[address.len() - 4..])
}
