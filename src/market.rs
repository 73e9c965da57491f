//! Market statistics widget

use serde::{Deserialize, Serialize};

use crate::format::format_number;

/// One headline figure in the market widget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketStat {
    pub label: String,
    pub value: f64,
    /// Currency prefix such as `$`
    #[serde(default)]
    pub prefix: String,
}

impl MarketStat {
    pub fn new(label: impl Into<String>, value: f64, prefix: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            prefix: prefix.into(),
        }
    }

    /// Compact display value (`"$22.58B"`)
    pub fn display_value(&self) -> String {
        let compact = format_number(self.value);
        match compact.strip_prefix('-') {
            Some(magnitude) => format!("-{}{}", self.prefix, magnitude),
            None => format!("{}{}", self.prefix, compact),
        }
    }
}

/// Figures shown in the sidebar widget
pub fn market_stats() -> Vec<MarketStat> {
    vec![MarketStat::new("Total Value Locked", 22_580_000_000.0, "$")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_value_locked() {
        let stats = market_stats();
        assert_eq!(stats[0].label, "Total Value Locked");
        assert_eq!(stats[0].display_value(), "$22.58B");
    }

    #[test]
    fn test_prefix_goes_after_sign() {
        let stat = MarketStat::new("Net Flow", -1_500_000.0, "$");
        assert_eq!(stat.display_value(), "-$1.5M");

        let stat = MarketStat::new("Projects", 1200.0, "");
        assert_eq!(stat.display_value(), "1.2K");
    }
}
