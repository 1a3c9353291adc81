//! # System Configuration
//!
//! Fee policy and limits read by every construction operation.
//!
//! ```toml
//! max_tx_utxo = 10
//! decimals = 18
//! state_keeper = "0x0000000000000000000000000000000000000000"
//! local_entry = "0x0000000000000000000000000000000000000000"
//!
//! [fee]
//! asset_id = "0x0000000000000000000000000000000000000000000000000000000000000000"
//! receiver = "0x1234567812345678123456781234567812345678123456781234567812345678"
//! amount = "10"
//! ```

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use shared_types::{Address, Amount, AssetId, OmniAddress, GAS_ASSET_ID};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("Failed to read config {path}: {message}")]
    Io { path: String, message: String },

    /// Failed to parse TOML content.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A transaction must be allowed at least one UTXO.
    #[error("max_tx_utxo must be greater than zero")]
    ZeroUtxoLimit,
}

/// Fee receiver of the reference deployment.
pub const DEFAULT_FEE_RECEIVER: OmniAddress = OmniAddress([
    0x12, 0x34, 0x56, 0x78, 0x12, 0x34, 0x56, 0x78, 0x12, 0x34, 0x56, 0x78, 0x12, 0x34, 0x56, 0x78,
    0x12, 0x34, 0x56, 0x78, 0x12, 0x34, 0x56, 0x78, 0x12, 0x34, 0x56, 0x78, 0x12, 0x34, 0x56, 0x78,
]);

/// Relay fee charged on every constructed transaction.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Asset the fee is paid in.
    #[serde(with = "hex_bytes")]
    pub asset_id: AssetId,
    /// Omniverse address credited with the fee.
    #[serde(with = "hex_omni")]
    pub receiver: OmniAddress,
    /// Fee amount; zero disables fee inputs and outputs.
    #[serde_as(as = "DisplayFromStr")]
    pub amount: Amount,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            asset_id: GAS_ASSET_ID,
            receiver: DEFAULT_FEE_RECEIVER,
            amount: 10,
        }
    }
}

/// Account-wide configuration. Mutated only through the administrative setters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Maximum consumed + produced UTXOs per constructed transaction.
    pub max_tx_utxo: usize,
    pub decimals: u8,
    #[serde(with = "hex_bytes")]
    pub state_keeper: Address,
    #[serde(with = "hex_bytes")]
    pub local_entry: Address,
    pub fee: FeeConfig,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            max_tx_utxo: 10,
            decimals: 18,
            state_keeper: [0u8; 20],
            local_entry: [0u8; 20],
            fee: FeeConfig::default(),
        }
    }
}

impl SystemConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SystemConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tx_utxo == 0 {
            return Err(ConfigError::ZeroUtxoLimit);
        }
        Ok(())
    }
}

/// `0x`-prefixed hex for fixed-size byte arrays.
mod hex_bytes {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer, const N: usize>(
        bytes: &[u8; N],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>, const N: usize>(
        deserializer: D,
    ) -> Result<[u8; N], D::Error> {
        let text = String::deserialize(deserializer)?;
        let mut out = [0u8; N];
        hex::decode_to_slice(text.trim_start_matches("0x"), &mut out).map_err(D::Error::custom)?;
        Ok(out)
    }
}

mod hex_omni {
    use serde::{Deserializer, Serializer};
    use shared_types::OmniAddress;

    pub fn serialize<S: Serializer>(
        value: &OmniAddress,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        super::hex_bytes::serialize(&value.0, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<OmniAddress, D::Error> {
        super::hex_bytes::deserialize(deserializer).map(OmniAddress)
    }
}
