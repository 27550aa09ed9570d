use crate::domain::model::{Localized, LocalizedField, OfficeRecord};
use crate::utils::error::Result;
use serde::Serialize;

pub const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Map search URL for a street address. Pure string transform.
pub fn build_map_query(address: &str) -> String {
    format!("{}{}", MAP_SEARCH_BASE, urlencoding::encode(address))
}

/// `tel:` link keeping only the digits of a display phone number.
pub fn tel_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("tel:{}", digits)
}

pub fn mailto_link(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Location,
    DirectLine,
    Email,
    Hours,
}

impl ContactKind {
    fn label(self) -> Localized {
        match self {
            ContactKind::Location => Localized::new("Ubicación", "Location Grid"),
            ContactKind::DirectLine => Localized::new("Línea Directa", "Direct Line"),
            ContactKind::Email => Localized::new("Canal Email", "Email Channel"),
            ContactKind::Hours => Localized::new("Horario Operativo", "Operating Hours"),
        }
    }
}

/// One entry of the contact panel shown for the active office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactAction {
    pub kind: ContactKind,
    pub label: String,
    pub value: String,
    pub href: String,
    pub opens_new_tab: bool,
}

impl ContactAction {
    fn new(kind: ContactKind, code: &str, value: String, href: String) -> Result<Self> {
        let label = kind.label().resolve("contact label", code)?.to_string();
        let opens_new_tab = href.starts_with("http://") || href.starts_with("https://");
        Ok(Self {
            kind,
            label,
            value,
            href,
            opens_new_tab,
        })
    }
}

impl OfficeRecord {
    /// Location, direct line, e-mail and opening hours, in display order.
    pub fn contact_actions(&self, code: &str) -> Result<Vec<ContactAction>> {
        let hours = self.localized(LocalizedField::Hours, code)?.to_string();
        Ok(vec![
            ContactAction::new(
                ContactKind::Location,
                code,
                self.address.clone(),
                self.map_query_url.clone(),
            )?,
            ContactAction::new(
                ContactKind::DirectLine,
                code,
                self.phone.clone(),
                tel_link(&self.phone),
            )?,
            ContactAction::new(
                ContactKind::Email,
                code,
                self.email.clone(),
                mailto_link(&self.email),
            )?,
            ContactAction::new(ContactKind::Hours, code, hours, "#".to_string())?,
        ])
    }
}
