use crate::amount::MAX_DECIMALS;
use anyhow::Context;
use std::env;

#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Extra or overriding `(SYMBOL, decimals)` registry entries.
    pub token_decimals: Vec<(String, u32)>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let token_decimals = match env::var("TOKEN_DECIMALS") {
            Ok(raw) => parse_token_decimals(&raw).context("TOKEN_DECIMALS is malformed")?,
            Err(env::VarError::NotPresent) => Vec::new(),
            Err(e) => return Err(e).context("TOKEN_DECIMALS must be valid unicode"),
        };

        Ok(Self { token_decimals })
    }
}

/// Parses `SYMBOL=decimals` pairs separated by commas, e.g. `PEPE=18,USDC.E=6`.
pub fn parse_token_decimals(raw: &str) -> anyhow::Result<Vec<(String, u32)>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> anyhow::Result<(String, u32)> {
            let (symbol, decimals) = entry
                .split_once('=')
                .with_context(|| format!("expected SYMBOL=decimals, got '{}'", entry))?;
            let symbol = symbol.trim();
            if symbol.is_empty() {
                anyhow::bail!("empty token symbol in '{}'", entry);
            }
            let decimals: u32 = decimals
                .trim()
                .parse()
                .with_context(|| format!("invalid decimals for {}", symbol))?;
            if decimals > MAX_DECIMALS {
                anyhow::bail!(
                    "decimals for {} must be at most {}, got {}",
                    symbol,
                    MAX_DECIMALS,
                    decimals
                );
            }
            Ok((symbol.to_uppercase(), decimals))
        })
        .collect()
}
