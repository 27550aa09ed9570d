use crate::core::catalog::Catalog;
use crate::core::status::compute_open_status;
use crate::domain::model::{LocalizedField, OfficeDefinition, OfficeRecord};
use crate::utils::error::{DirectoryError, Result};
use std::sync::Arc;

/// One view over the shared catalog, with its own selected office.
///
/// Selection is stored as a position validated against the immutable catalog,
/// so [`OfficeDirectory::active_office`] always resolves.
#[derive(Debug, Clone)]
pub struct OfficeDirectory {
    catalog: Arc<Catalog>,
    active: usize,
}

impl OfficeDirectory {
    /// Starts on the first office in city order.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog, active: 0 }
    }

    pub fn from_definitions(definitions: Vec<OfficeDefinition>) -> Result<Self> {
        Ok(Self::new(Arc::new(Catalog::build(definitions)?)))
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn offices(&self) -> &[OfficeRecord] {
        self.catalog.offices()
    }

    /// Selects `id`. Unknown ids leave the current selection in place.
    pub fn select_office(&mut self, id: &str) -> Result<&OfficeRecord> {
        match self.catalog.position(id) {
            Some(index) => {
                self.active = index;
                tracing::debug!("Selected office {}", id);
                Ok(self.catalog.at(index))
            }
            None => {
                tracing::warn!(
                    "Rejected selection of unknown office {}, keeping {}",
                    id,
                    self.active_id()
                );
                Err(DirectoryError::NotFound { id: id.to_string() })
            }
        }
    }

    pub fn active_office(&self) -> &OfficeRecord {
        self.catalog.at(self.active)
    }

    pub fn active_id(&self) -> &str {
        &self.active_office().id
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == id
    }

    /// Text of the active office's `field` in `code`, or Spanish when `code`
    /// is not exactly `es` or `en`.
    pub fn localize(&self, field: LocalizedField, code: &str) -> Result<&str> {
        self.active_office().localized(field, code)
    }

    pub fn compute_open_status(&self, now_local_hour: u32) -> bool {
        compute_open_status(now_local_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sample::sample_offices;

    fn directory() -> OfficeDirectory {
        OfficeDirectory::from_definitions(sample_offices()).unwrap()
    }

    #[test]
    fn test_starts_on_first_city() {
        let directory = directory();
        assert_eq!(directory.active_office().city, "Chicago");
        assert!(directory.is_active("chicago"));
    }

    #[test]
    fn test_select_known_office() {
        let mut directory = directory();
        let office = directory.select_office("houston-principal").unwrap();
        assert_eq!(office.city, "Houston");
        assert_eq!(directory.active_id(), "houston-principal");
    }

    #[test]
    fn test_select_unknown_office_keeps_previous() {
        let mut directory = directory();
        directory.select_office("memphis").unwrap();

        let err = directory.select_office("paris").unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound { ref id } if id == "paris"));
        assert_eq!(directory.active_id(), "memphis");
    }

    #[test]
    fn test_views_share_catalog_but_not_selection() {
        let first = directory();
        let mut second = OfficeDirectory::new(Arc::clone(first.catalog()));

        second.select_office("denver").unwrap();
        assert_eq!(first.active_id(), "chicago");
        assert_eq!(second.active_id(), "denver");
        assert!(Arc::ptr_eq(first.catalog(), second.catalog()));
    }

    #[test]
    fn test_localize_active_office() {
        let mut directory = directory();
        directory.select_office("los-angeles").unwrap();

        let quote = LocalizedField::Quote;
        assert_eq!(directory.localize(quote, "es").unwrap(), "Defensa sin fronteras.");
        assert_eq!(directory.localize(quote, "en").unwrap(), "Defense without borders.");
        assert_eq!(directory.localize(quote, "fr").unwrap(), "Defensa sin fronteras.");
        assert_eq!(directory.localize(quote, "en-US").unwrap(), "Defensa sin fronteras.");
    }

    #[test]
    fn test_localize_error_names_the_field() {
        let mut office = directory().active_office().clone();
        office.hours.en = "  ".to_string();
        let directory = OfficeDirectory::new(Arc::new(Catalog::from_records_unchecked(vec![office])));

        let err = directory.localize(LocalizedField::Hours, "en").unwrap_err();
        assert!(matches!(
            err,
            DirectoryError::MissingTranslation { ref field, ref language }
                if field == "hours" && language == "en"
        ));
        assert!(directory.localize(LocalizedField::Title, "en").is_ok());
    }
}
