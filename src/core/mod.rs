pub mod catalog;
pub mod directory;
pub mod links;
pub mod refresher;
pub mod status;

pub use crate::domain::model::{Language, Localized, LocalizedField, OfficeDefinition, OfficeRecord};
pub use crate::domain::ports::Clock;
pub use crate::utils::error::Result;
