use std::collections::BTreeMap;

const DEFAULT_TOKENS: &[(&str, u32)] = &[
    ("ETH", 18),
    ("WETH", 18),
    ("DAI", 18),
    ("USDC", 6),
    ("USDT", 6),
    ("WBTC", 8),
    ("BTC", 8),
];

/// Symbol to decimals lookup used when a caller names a token instead of
/// passing decimals directly. Symbols are matched case-insensitively.
#[derive(Clone, Debug)]
pub struct TokenRegistry {
    decimals: BTreeMap<String, u32>,
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_TOKENS
                .iter()
                .map(|(symbol, decimals)| (symbol.to_string(), *decimals))
                .collect(),
        }
    }
}

impl TokenRegistry {
    /// Builds the default registry overlaid with `overrides`. Later entries win.
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        let mut registry = Self::default();
        for (symbol, decimals) in overrides {
            registry.decimals.insert(symbol.to_uppercase(), decimals);
        }
        registry
    }

    pub fn decimals(&self, symbol: &str) -> Option<u32> {
        self.decimals.get(&symbol.trim().to_uppercase()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.decimals.iter().map(|(symbol, decimals)| (symbol.as_str(), *decimals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_case_insensitive() {
        let registry = TokenRegistry::default();
        assert_eq!(registry.decimals("usdc"), Some(6));
        assert_eq!(registry.decimals("Eth"), Some(18));
        assert_eq!(registry.decimals("UNKNOWN"), None);
    }

    #[test]
    fn overrides_replace_and_extend() {
        let registry =
            TokenRegistry::with_overrides(vec![("usdc".to_string(), 18), ("PEPE".to_string(), 18)]);
        assert_eq!(registry.decimals("USDC"), Some(18));
        assert_eq!(registry.decimals("pepe"), Some(18));
        assert_eq!(registry.decimals("WBTC"), Some(8));
    }
}
