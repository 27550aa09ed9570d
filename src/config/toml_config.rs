use crate::config::sample::sample_offices;
use crate::core::catalog::Catalog;
use crate::core::directory::OfficeDirectory;
use crate::domain::model::{Language, OfficeDefinition};
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Office catalog file.
///
/// ```toml
/// [site]
/// name = "Manuel Solis"
/// default_language = "es"
///
/// [[offices]]
/// city = "Dallas"
/// state = "TX"
/// title = { es = "Dallas", en = "Dallas" }
/// ...
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub site: SiteConfig,
    #[serde(default)]
    pub offices: Vec<OfficeDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub base_url: Option<String>,
    pub default_language: Option<String>,
}

impl CatalogConfig {
    /// 從 TOML 檔案載入目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// The bundled catalog of the firm's nine offices.
    pub fn sample() -> Self {
        Self {
            site: SiteConfig {
                name: "Manuel Solis".to_string(),
                base_url: Some("https://manuelsolis.com".to_string()),
                default_language: Some(Language::Es.code().to_string()),
            },
            offices: sample_offices(),
        }
    }

    /// 替換環境變數 (例如 ${OFFICE_PHONE}); unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DirectoryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("site.name", &self.site.name)?;

        if let Some(base_url) = &self.site.base_url {
            validation::validate_url("site.base_url", base_url)?;
        }

        if let Some(code) = &self.site.default_language {
            if Language::parse(code).is_none() {
                return Err(DirectoryError::InvalidConfigValueError {
                    field: "site.default_language".to_string(),
                    value: code.clone(),
                    reason: "Supported languages: es, en".to_string(),
                });
            }
        }

        if self.offices.is_empty() {
            return Err(DirectoryError::MissingConfigError {
                field: "offices".to_string(),
            });
        }

        for (index, office) in self.offices.iter().enumerate() {
            let field = |name: &str| format!("offices[{}].{}", index, name);
            validation::validate_non_empty_string(&field("city"), &office.city)?;
            validation::validate_non_empty_string(&field("state"), &office.state)?;
            validation::validate_non_empty_string(&field("address"), &office.address)?;
            validation::validate_phone(&field("phone"), &office.phone)?;
            validation::validate_email(&field("email"), &office.email)?;
            validation::validate_non_empty_string(&field("image"), &office.image)?;
        }

        Ok(())
    }

    pub fn default_language(&self) -> Language {
        self.site
            .default_language
            .as_deref()
            .and_then(Language::parse)
            .unwrap_or_default()
    }

    pub fn build_catalog(&self) -> Result<Catalog> {
        self.validate_config()?;
        Catalog::build(self.offices.clone())
    }

    pub fn build_directory(&self) -> Result<OfficeDirectory> {
        Ok(OfficeDirectory::new(Arc::new(self.build_catalog()?)))
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
