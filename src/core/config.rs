//! Generator configuration.
//!
//! [`GeneratorConfig`] controls the shape of the generated snippet and which
//! generic wrappers are peeled off a handler's return type. Every field has a
//! default, so an empty TOML file is a valid configuration:
//!
//! ```toml
//! client_name = "mockMvc"
//! document_identifier = "user-lookup"
//! response_wrappers = ["ResponseEntity", "HttpEntity"]
//! page_wrappers = ["Page", "Slice"]
//! max_depth = 16
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{Error, Result};
use crate::model::simple_name;

static JAVA_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid"));

/// Options for a generation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Variable holding the MockMvc instance in the generated test
    pub client_name: String,

    /// Expression used for `contentType(..)` and `accept(..)`
    pub content_type: String,

    /// Fixed identifier for `document(..)`; defaults to the snake_case handler name
    pub document_identifier: Option<String>,

    /// Wrappers unwrapped to their first type argument (e.g. `ResponseEntity<T>`)
    pub response_wrappers: Vec<String>,

    /// Pagination wrappers; their payload is documented as a collection
    pub page_wrappers: Vec<String>,

    /// Nesting limit for field traversal
    pub max_depth: usize,

    /// Leave `static` fields out of field documentation
    pub skip_static_fields: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            client_name: "mockMvc".to_string(),
            content_type: "MediaType.APPLICATION_JSON".to_string(),
            document_identifier: None,
            response_wrappers: vec!["ResponseEntity".to_string()],
            page_wrappers: vec!["Page".to_string(), "Slice".to_string()],
            max_depth: 32,
            skip_static_fields: true,
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GeneratorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loaded generator configuration");
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !JAVA_IDENTIFIER.is_match(&self.client_name) {
            return Err(Error::config(format!(
                "client_name '{}' is not a valid identifier",
                self.client_name
            )));
        }
        if self.content_type.trim().is_empty() {
            return Err(Error::config("content_type cannot be empty"));
        }
        if self.max_depth == 0 {
            return Err(Error::config("max_depth must be at least 1"));
        }
        if let Some(wrapper) = self
            .response_wrappers
            .iter()
            .chain(&self.page_wrappers)
            .find(|w| w.trim().is_empty())
        {
            return Err(Error::config(format!("invalid wrapper name '{wrapper}'")));
        }
        Ok(())
    }

    pub fn is_response_wrapper(&self, type_name: &str) -> bool {
        matches_wrapper(&self.response_wrappers, type_name)
    }

    pub fn is_page_wrapper(&self, type_name: &str) -> bool {
        matches_wrapper(&self.page_wrappers, type_name)
    }
}

/// Wrappers match by full name or by simple name
fn matches_wrapper(wrappers: &[String], type_name: &str) -> bool {
    wrappers
        .iter()
        .any(|w| w == type_name || simple_name(w) == simple_name(type_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.client_name, "mockMvc");
        assert_eq!(config.content_type, "MediaType.APPLICATION_JSON");
        assert!(config.document_identifier.is_none());
        assert_eq!(config.max_depth, 32);
        assert!(config.skip_static_fields);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = GeneratorConfig::from_toml_str(
            r#"
client_name = "mvc"
document_identifier = "users"
response_wrappers = ["ResponseEntity", "HttpEntity"]
max_depth = 4
"#,
        )
        .unwrap();

        assert_eq!(config.client_name, "mvc");
        assert_eq!(config.document_identifier.as_deref(), Some("users"));
        assert_eq!(config.response_wrappers.len(), 2);
        assert_eq!(config.page_wrappers, vec!["Page", "Slice"]);
        assert_eq!(config.max_depth, 4);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let result = GeneratorConfig::from_toml_str("clientName = \"mvc\"");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_validation_errors() {
        let bad_client = GeneratorConfig {
            client_name: "mock mvc".to_string(),
            ..Default::default()
        };
        assert!(matches!(bad_client.validate(), Err(Error::Config(_))));

        let zero_depth = GeneratorConfig {
            max_depth: 0,
            ..Default::default()
        };
        assert!(zero_depth.validate().is_err());

        let blank_wrapper = GeneratorConfig {
            page_wrappers: vec![" ".to_string()],
            ..Default::default()
        };
        assert!(blank_wrapper.validate().is_err());
    }

    #[test]
    fn test_wrapper_matching() {
        let config = GeneratorConfig::default();
        assert!(config.is_response_wrapper("ResponseEntity"));
        assert!(config.is_response_wrapper("org.springframework.http.ResponseEntity"));
        assert!(config.is_page_wrapper("org.springframework.data.domain.Page"));
        assert!(!config.is_page_wrapper("java.util.List"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"max_depth = 8\n")
            .expect("Failed to write temp file");
        file.flush().expect("Failed to flush temp file");

        let config = GeneratorConfig::load(file.path()).unwrap();
        assert_eq!(config.max_depth, 8);

        assert!(matches!(
            GeneratorConfig::load(Path::new("/nonexistent/restdoc.toml")),
            Err(Error::Io(_))
        ));
    }
}
