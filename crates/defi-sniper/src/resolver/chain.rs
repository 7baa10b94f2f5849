//! Chain aliases and identifier shapes

use std::collections::HashMap;

const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("ethereum", "ethereum"),
    ("eth", "ethereum"),
    ("solana", "solana"),
    ("sol", "solana"),
    ("bsc", "bsc"),
    ("bnb", "bsc"),
    ("polygon", "polygon"),
    ("matic", "polygon"),
    ("arbitrum", "arbitrum"),
    ("arb", "arbitrum"),
    ("optimism", "optimism"),
    ("op", "optimism"),
    ("avalanche", "avalanche"),
    ("avax", "avalanche"),
    ("fantom", "fantom"),
    ("ftm", "fantom"),
    ("cronos", "cronos"),
    ("cro", "cronos"),
    ("harmony", "harmony"),
    ("one", "harmony"),
    ("moonbeam", "moonbeam"),
    ("glmr", "moonbeam"),
    ("moonriver", "moonriver"),
    ("movr", "moonriver"),
    ("base", "base"),
];

/// Maps loose chain names to the keys upstream uses
#[derive(Clone, Debug)]
pub struct ChainAliases {
    table: HashMap<String, String>,
}

impl Default for ChainAliases {
    fn default() -> Self {
        Self {
            table: DEFAULT_ALIASES
                .iter()
                .map(|(alias, chain)| ((*alias).to_string(), (*chain).to_string()))
                .collect(),
        }
    }
}

impl ChainAliases {
    /// Empty table: every hint normalizes to its lower-cased self
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: &str, chain: &str) -> Self {
        self.table.insert(alias.to_lowercase(), chain.to_lowercase());
        self
    }

    /// Canonical chain key; unknown hints pass through lower-cased
    pub fn normalize(&self, hint: &str) -> String {
        let key = hint.trim().to_lowercase();
        self.table.get(&key).cloned().unwrap_or(key)
    }
}

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// What an identifier looks like
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressShape {
    /// `0x` + 40 hex digits
    Evm,
    /// 32-44 base58 characters (Solana style)
    Base58,
    /// Symbol or free text
    Text,
}

impl AddressShape {
    pub fn detect(identifier: &str) -> Self {
        if let Some(hex) = identifier.strip_prefix("0x") {
            if hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Self::Evm;
            }
            return Self::Text;
        }

        if (32..=44).contains(&identifier.len())
            && identifier.chars().all(|c| BASE58_ALPHABET.contains(c))
        {
            return Self::Base58;
        }

        Self::Text
    }

    pub const fn is_address(self) -> bool {
        !matches!(self, Self::Text)
    }

    /// Chain assumed for an address when the caller gave no hint
    pub const fn default_chain(self) -> Option<&'static str> {
        match self {
            Self::Evm => Some("ethereum"),
            Self::Base58 => Some("solana"),
            Self::Text => None,
        }
    }
}
