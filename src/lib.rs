pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::clock::{ManualClock, SystemClock};
pub use config::toml_config::CatalogConfig;
pub use core::catalog::Catalog;
pub use core::directory::OfficeDirectory;
pub use core::links::{build_map_query, mailto_link, tel_link, ContactAction, ContactKind};
pub use core::refresher::{RefresherHandle, StatusRefresher, REFRESH_PERIOD};
pub use core::status::{compute_open_status, StatusSnapshot, BUSINESS_HOURS};
pub use domain::model::{Language, Localized, LocalizedField, OfficeDefinition, OfficeRecord};
pub use domain::ports::Clock;
pub use utils::error::{DirectoryError, Result};
