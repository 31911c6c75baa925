use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub odds_api: OddsApiSettings,
    pub scan: ScanSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsApiSettings {
    pub base_url: String,
    pub api_key: String,
    pub requests_per_minute: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Books surfaced as price context in every recommendation, in order.
    pub comparison_books: Vec<String>,
    /// Where the positive-EV audit CSV is written (overwritten per scan).
    pub audit_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            odds_api: OddsApiSettings {
                base_url: "https://api.oddsfeed.io".to_string(),
                api_key: String::new(),
                requests_per_minute: 60,
                timeout_secs: 30,
            },
            scan: ScanSettings {
                comparison_books: vec![
                    "BetOnline".to_string(),
                    "DraftKings".to_string(),
                    "BookMaker".to_string(),
                    "Pinnacle".to_string(),
                ],
                audit_path: "evbets.csv".to_string(),
            },
        }
    }
}
