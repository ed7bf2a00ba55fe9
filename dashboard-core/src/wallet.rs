//! Wallet identities used to query club ownership

use serde::{Deserialize, Serialize};

/// A user-held wallet identity (address + display label)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    /// 0x-prefixed, 40-hex-char address
    pub address: String,
    /// Display label chosen by the user
    pub name: String,
}

impl Wallet {
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
        }
    }

    /// Case-insensitive address equality, for duplicate detection
    pub fn same_address(&self, other_address: &str) -> bool {
        self.address.eq_ignore_ascii_case(other_address)
    }
}

/// The built-in wallet list restored by reset-to-defaults
pub fn default_wallets() -> Vec<Wallet> {
    vec![
        Wallet::new("0x37a42e78a25539006ab038f17019f833b79516f9", "foot-01"),
        Wallet::new("0x2d2b91e478ea9f02f953779bdb2f52d18b589523", "foot-02"),
        Wallet::new("0xf7d4aee315cbc90ce8f8ee71adbc50806878f972", "foot-03"),
        Wallet::new("0xf791eea26f5addc07e434177f0e563712920715e", "foot-04"),
        Wallet::new("0x7e9eab5e9d38b3345f57326c96d0bd65a12b6994", "Foot-05"),
        Wallet::new("0x0A032289552D817C15C185dBfdf43B812423Ba82", "debug"),
    ]
}

/// Validate a wallet address: "0x" followed by exactly 40 hex characters
pub fn is_valid_address(address: &str) -> bool {
    let Some(hex) = address.strip_prefix("0x") else {
        return false;
    };
    hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit())
}
