use serde::Deserialize;

/// Settings for a fresh [`Ledger`](crate::domain::ledger::Ledger).
///
/// Every field has a default, so a partial document deserializes fine:
///
/// ```
/// use account_ledger::config::LedgerConfig;
///
/// let config: LedgerConfig = serde_json::from_str(r#"{ "interest_rate": "0.01" }"#).unwrap();
/// assert_eq!(config.interest_rate, "0.01");
/// assert_eq!(config.first_transaction_id, 1);
/// assert_eq!(config.default_zone, "UTC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Shared interest rate as a decimal string; parsed and validated by the ledger.
    pub interest_rate: String,
    pub first_transaction_id: u64,
    /// IANA zone name; validated by the ledger.
    pub default_zone: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            interest_rate: "0.005".to_string(),
            first_transaction_id: 1,
            default_zone: "UTC".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: LedgerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LedgerConfig::default());
        assert_eq!(config.default_zone, "UTC");
    }

    #[test]
    fn all_fields_are_read() {
        let config: LedgerConfig =
            serde_json::from_str(r#"{ "interest_rate": "0.02", "first_transaction_id": 500, "default_zone": "Asia/Jerusalem" }"#)
                .unwrap();
        assert_eq!(config.interest_rate, "0.02");
        assert_eq!(config.first_transaction_id, 500);
        assert_eq!(config.default_zone, "Asia/Jerusalem");
    }
}
