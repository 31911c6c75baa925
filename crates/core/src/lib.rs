pub mod config;
pub mod config_loader;
pub mod quote;
pub mod traits;

pub use config::{AppConfig, OddsApiSettings, ScanSettings};
pub use config_loader::ConfigLoader;
pub use quote::{MarketFamily, OddsRequest, QuoteRow, Side, Sportsbook};
pub use traits::OddsSource;
