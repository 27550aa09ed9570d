use crate::core::links::build_map_query;
use crate::domain::model::{OfficeDefinition, OfficeRecord};
use crate::utils::error::{DirectoryError, Result};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// The immutable, city-sorted list of offices.
///
/// A built catalog is never empty and its ids are unique. Share it between
/// views with an `Arc`; selection lives in [`crate::core::directory::OfficeDirectory`].
#[derive(Debug, Clone)]
pub struct Catalog {
    offices: Vec<OfficeRecord>,
}

impl Catalog {
    pub fn build(definitions: Vec<OfficeDefinition>) -> Result<Self> {
        if definitions.is_empty() {
            return Err(DirectoryError::EmptyCatalog);
        }

        let mut definitions = definitions;
        definitions.sort_by(|a, b| compare_cities(&a.city, &b.city));

        let mut seen = HashSet::with_capacity(definitions.len());
        let mut offices = Vec::with_capacity(definitions.len());

        for definition in definitions {
            let record = into_record(definition)?;
            if !seen.insert(record.id.clone()) {
                return Err(DirectoryError::DuplicateOfficeId { id: record.id });
            }
            tracing::debug!("Catalog entry {} ({}, {})", record.id, record.city, record.state);
            offices.push(record);
        }

        tracing::debug!("Built office catalog with {} entries", offices.len());
        Ok(Self { offices })
    }

    pub fn offices(&self) -> &[OfficeRecord] {
        &self.offices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OfficeRecord> {
        self.offices.iter()
    }

    pub fn len(&self) -> usize {
        self.offices.len()
    }

    /// Always false for a built catalog.
    pub fn is_empty(&self) -> bool {
        self.offices.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.offices.iter().position(|office| office.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&OfficeRecord> {
        self.offices.iter().find(|office| office.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.offices.iter().map(|office| office.id.as_str()).collect()
    }

    pub(crate) fn at(&self, index: usize) -> &OfficeRecord {
        &self.offices[index]
    }

    /// Skips every build check. Only for tests that need a record `build` rejects.
    #[cfg(test)]
    pub(crate) fn from_records_unchecked(offices: Vec<OfficeRecord>) -> Self {
        Self { offices }
    }

    /// Offices grouped by state code; catalog order is kept inside each group.
    pub fn by_state(&self) -> BTreeMap<&str, Vec<&OfficeRecord>> {
        let mut groups: BTreeMap<&str, Vec<&OfficeRecord>> = BTreeMap::new();
        for office in &self.offices {
            groups.entry(office.state.as_str()).or_default().push(office);
        }
        groups
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a OfficeRecord;
    type IntoIter = std::slice::Iter<'a, OfficeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.offices.iter()
    }
}

/// Lowercased city with accents stripped, e.g. `Álamo` sorts next to `alamo`.
fn collation_key(city: &str) -> String {
    city.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Accent- and case-insensitive order, with the raw string breaking ties.
pub fn compare_cities(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Lowercases the city and joins whitespace-separated words with `-`.
pub fn derive_office_id(city: &str) -> String {
    city.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

fn into_record(definition: OfficeDefinition) -> Result<OfficeRecord> {
    if definition.city.trim().is_empty() {
        return Err(DirectoryError::InvalidConfigValueError {
            field: "offices.city".to_string(),
            value: definition.city,
            reason: "City cannot be empty".to_string(),
        });
    }

    let id = match definition.id {
        Some(id) if !id.trim().is_empty() => id.trim().to_string(),
        _ => derive_office_id(&definition.city),
    };

    definition.title.ensure_complete(&format!("{}.title", id))?;
    definition.quote.ensure_complete(&format!("{}.quote", id))?;
    definition.description.ensure_complete(&format!("{}.description", id))?;
    definition.hours.ensure_complete(&format!("{}.hours", id))?;
    for (index, service) in definition.services.iter().enumerate() {
        service.ensure_complete(&format!("{}.services[{}]", id, index))?;
    }

    Ok(OfficeRecord {
        map_query_url: build_map_query(&definition.address),
        id,
        city: definition.city,
        state: definition.state,
        title: definition.title,
        quote: definition.quote,
        description: definition.description,
        hours: definition.hours,
        address: definition.address,
        phone: definition.phone,
        email: definition.email,
        image_path: definition.image,
        services: definition.services,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Localized;

    fn definition(id: Option<&str>, city: &str) -> OfficeDefinition {
        OfficeDefinition {
            id: id.map(str::to_string),
            city: city.to_string(),
            state: "TX".to_string(),
            title: Localized::same(city),
            quote: Localized::new("Cita", "Quote"),
            description: Localized::new("Descripción", "Description"),
            hours: Localized::new("Lun - Vie 9am - 6pm", "Mon - Fri 9am - 6pm"),
            address: format!("1 Main St, {}", city),
            phone: "(713) 701-1731".to_string(),
            email: "office@example.com".to_string(),
            image: format!("/offices/{}.png", city),
            services: vec![Localized::new("INMIGRACIÓN", "IMMIGRATION")],
        }
    }

    #[test]
    fn test_derive_office_id() {
        assert_eq!(derive_office_id("El Paso"), "el-paso");
        assert_eq!(derive_office_id("Houston   Bellaire"), "houston-bellaire");
        assert_eq!(derive_office_id("  Los\tAngeles "), "los-angeles");
    }

    #[test]
    fn test_compare_cities_ignores_case_and_accents() {
        assert_eq!(compare_cities("álamo", "Amarillo"), Ordering::Less);
        assert_eq!(compare_cities("dallas", "Denver"), Ordering::Less);
        assert_eq!(compare_cities("Houston", "Houston Bellaire"), Ordering::Less);
        assert_ne!(compare_cities("Dallas", "dallas"), Ordering::Equal);
    }

    #[test]
    fn test_build_sorts_and_derives_ids() {
        let catalog = Catalog::build(vec![
            definition(None, "Memphis"),
            definition(Some("chicago"), "Chicago"),
            definition(None, "El Paso"),
        ])
        .unwrap();

        assert_eq!(catalog.ids(), vec!["chicago", "el-paso", "memphis"]);
        assert!(catalog.get("el-paso").unwrap().map_query_url.contains("El%20Paso"));
    }

    #[test]
    fn test_blank_explicit_id_is_derived() {
        let catalog = Catalog::build(vec![definition(Some("  "), "Denver")]).unwrap();
        assert!(catalog.contains("denver"));
    }

    #[test]
    fn test_duplicate_ids_fail_fast() {
        let result = Catalog::build(vec![
            definition(Some("dallas"), "Dallas"),
            definition(None, "Dallas"),
        ]);
        assert!(matches!(
            result,
            Err(DirectoryError::DuplicateOfficeId { ref id }) if id == "dallas"
        ));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(matches!(
            Catalog::build(Vec::new()),
            Err(DirectoryError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_incomplete_translation_is_rejected() {
        let mut office = definition(None, "Chicago");
        office.quote = Localized::new("Justicia para el medio oeste.", "");
        let err = Catalog::build(vec![office]).unwrap_err();
        assert!(matches!(
            err,
            DirectoryError::MissingTranslation { ref field, ref language }
                if field == "chicago.quote" && language == "en"
        ));
    }

    #[test]
    fn test_by_state_keeps_catalog_order() {
        let mut denver = definition(None, "Denver");
        denver.state = "CO".to_string();
        let catalog = Catalog::build(vec![
            definition(None, "Houston"),
            denver,
            definition(None, "Dallas"),
        ])
        .unwrap();

        let groups = catalog.by_state();
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!["CO", "TX"]);
        let texas: Vec<&str> = groups["TX"].iter().map(|o| o.city.as_str()).collect();
        assert_eq!(texas, vec!["Dallas", "Houston"]);
    }
}
