//! Runtime configuration
//!
//! Loaded from environment variables, optionally seeded from a `.env`
//! file. Chains are indexed from 1:
//!
//! ```text
//! CHAINS_COUNT=2
//! CHAIN_1_NAME=terra        CHAIN_1_EID=30001   CHAIN_1_RPC_URL=...
//! CHAIN_1_ROUTER_ADDRESS=...                    CHAIN_1_ESCROW_ADDRESS=...
//! HOP_EID=30002             HOP_RECIPIENT=terra1...
//! ```

use std::collections::HashSet;
use std::str::FromStr;
use std::time::Duration;

use common::address::to_raw_address;
use eyre::{eyre, Result, WrapErr};

use crate::retry::RetryPolicy;

const DEFAULT_EXECUTOR_GAS_LIMIT: u128 = 200_000;
const MAX_TOTAL_FEE_BPS: u32 = 1000;

/// One chain the orchestrator can reach
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    pub name: String,
    pub eid: u32,
    pub rpc_url: String,
    pub router_address: String,
    pub escrow_address: String,
}

/// Intermediate chain for two-leg relays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopConfig {
    pub eid: u32,
    /// Receives first-leg funds on the hop chain
    pub recipient: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorConfig {
    pub chains: Vec<ChainConfig>,
    pub hop: Option<HopConfig>,
    pub retry: RetryPolicy,
    pub executor_gas_limit: u128,
    /// Escrow fees charged on order creation, used to size relay legs
    pub escrow_fee_bps: u16,
    pub protocol_fee_bps: u16,
}

impl OrchestratorConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn load() -> Result<Self> {
        // .env is optional
        let _ = dotenvy::dotenv();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let count: usize = required(&lookup, "CHAINS_COUNT")?;

        let mut chains = Vec::with_capacity(count);
        for i in 1..=count {
            let prefix = format!("CHAIN_{}", i);
            let name = lookup(&format!("{}_NAME", prefix)).unwrap_or_else(|| format!("chain_{}", i));

            chains.push(ChainConfig {
                name,
                eid: required(&lookup, &format!("{}_EID", prefix))?,
                rpc_url: required_string(&lookup, &format!("{}_RPC_URL", prefix))?,
                router_address: required_string(&lookup, &format!("{}_ROUTER_ADDRESS", prefix))?,
                escrow_address: required_string(&lookup, &format!("{}_ESCROW_ADDRESS", prefix))?,
            });
        }

        let hop = match (lookup("HOP_EID"), lookup("HOP_RECIPIENT")) {
            (None, None) => None,
            (Some(eid), Some(recipient)) => Some(HopConfig {
                eid: eid
                    .trim()
                    .parse()
                    .wrap_err_with(|| format!("Invalid HOP_EID: {}", eid))?,
                recipient: recipient.trim().to_string(),
            }),
            _ => return Err(eyre!("HOP_EID and HOP_RECIPIENT must be set together")),
        };

        let retry = RetryPolicy {
            max_attempts: optional(&lookup, "RETRY_MAX_ATTEMPTS", 5)?,
            base_delay: Duration::from_millis(optional(&lookup, "RETRY_BASE_DELAY_MS", 1000)?),
            max_jitter: Duration::from_millis(optional(&lookup, "RETRY_MAX_JITTER_MS", 500)?),
        };

        let config = Self {
            chains,
            hop,
            retry,
            executor_gas_limit: optional(
                &lookup,
                "EXECUTOR_GAS_LIMIT",
                DEFAULT_EXECUTOR_GAS_LIMIT,
            )?,
            escrow_fee_bps: optional(&lookup, "ESCROW_FEE_BPS", 0)?,
            protocol_fee_bps: optional(&lookup, "PROTOCOL_FEE_BPS", 0)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn chain(&self, eid: u32) -> Option<&ChainConfig> {
        self.chains.iter().find(|c| c.eid == eid)
    }

    fn validate(&self) -> Result<()> {
        if self.chains.is_empty() {
            return Err(eyre!("At least one chain must be configured"));
        }

        let mut seen = HashSet::new();
        for chain in &self.chains {
            if !seen.insert(chain.eid) {
                return Err(eyre!("Duplicate chain eid: {}", chain.eid));
            }
            if chain.rpc_url.is_empty() {
                return Err(eyre!("Empty RPC URL for chain {}", chain.name));
            }
        }

        if let Some(hop) = &self.hop {
            if self.chain(hop.eid).is_none() {
                return Err(eyre!("HOP_EID {} is not a configured chain", hop.eid));
            }
            to_raw_address(&hop.recipient)
                .map_err(|e| eyre!("Invalid HOP_RECIPIENT {}: {}", hop.recipient, e))?;
        }

        if self.retry.max_attempts == 0 {
            return Err(eyre!("RETRY_MAX_ATTEMPTS must be at least 1"));
        }
        if self.executor_gas_limit == 0 {
            return Err(eyre!("EXECUTOR_GAS_LIMIT must be greater than zero"));
        }

        let total_bps = self.escrow_fee_bps as u32 + self.protocol_fee_bps as u32;
        if total_bps > MAX_TOTAL_FEE_BPS {
            return Err(eyre!(
                "ESCROW_FEE_BPS + PROTOCOL_FEE_BPS = {} exceeds {}",
                total_bps,
                MAX_TOTAL_FEE_BPS
            ));
        }

        Ok(())
    }
}

fn required_string<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).ok_or_else(|| eyre!("Missing {}", key))?;
    Ok(value.trim().to_string())
}

fn required<T, F>(lookup: &F, key: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    let value = required_string(lookup, key)?;
    value
        .parse()
        .wrap_err_with(|| format!("Invalid {}: {}", key, value))
}

fn optional<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid {}: {}", key, value)),
        None => Ok(default),
    }
}
