use lotcopy_io::SheetSelector;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// First non-empty cell of the header row must equal this exactly.
pub const HEADER_TOKEN: &str = "Date";
/// First non-empty cell of the footer row must start with this.
pub const FOOTER_PREFIX: &str = "Somme";
/// Label whose right-hand neighbour holds the lot code; also the destination column title.
pub const CODE_LOT_LABEL: &str = "Code Lot";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config: `{field}` must not be blank")]
    BlankToken { field: &'static str },

    #[error("invalid config: `{field}` has leading or trailing whitespace: {value:?}")]
    PaddedToken { field: &'static str, value: String },
}

/// Tokens and sheet choices for a merge run.
///
/// Every field has a default, so a YAML file only lists what it overrides:
///
/// ```yaml
/// footer_prefix: Total
/// source_sheet: Réception
/// ```
///
/// A missing sheet name means the workbook's active sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeConfig {
    pub header_token: String,
    pub footer_prefix: String,
    pub code_lot_label: String,
    pub source_sheet: Option<String>,
    pub destination_sheet: Option<String>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            header_token: HEADER_TOKEN.to_string(),
            footer_prefix: FOOTER_PREFIX.to_string(),
            code_lot_label: CODE_LOT_LABEL.to_string(),
            source_sheet: None,
            destination_sheet: None,
        }
    }
}

impl MergeConfig {
    pub fn source_selector(&self) -> SheetSelector {
        self.source_sheet.clone().into()
    }

    pub fn destination_selector(&self) -> SheetSelector {
        self.destination_sheet.clone().into()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_reader<R: std::io::Read>(reader: R) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Cells are trimmed before matching, so a blank or padded token could
    /// never match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("header_token", &self.header_token),
            ("footer_prefix", &self.footer_prefix),
            ("code_lot_label", &self.code_lot_label),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::BlankToken { field });
            }
            if value.trim() != value.as_str() {
                return Err(ConfigError::PaddedToken {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = MergeConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, MergeConfig::default());
        assert_eq!(config.header_token, "Date");
        assert_eq!(config.footer_prefix, "Somme");
        assert_eq!(config.code_lot_label, "Code Lot");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let yaml = "footer_prefix: Total\nsource_sheet: Feuil2\n";
        let config = MergeConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.footer_prefix, "Total");
        assert_eq!(config.header_token, "Date");
        assert_eq!(config.source_selector(), SheetSelector::Named("Feuil2".into()));
        assert_eq!(config.destination_selector(), SheetSelector::Active);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = MergeConfig::from_yaml_str("header: Date\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn blank_token_is_rejected() {
        let err = MergeConfig::from_yaml_str("code_lot_label: '  '\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config: `code_lot_label` must not be blank"
        );
    }

    #[test]
    fn padded_token_is_rejected() {
        let err = MergeConfig::from_yaml_str("header_token: ' Date '\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config: `header_token` has leading or trailing whitespace: \" Date \""
        );

        let config = MergeConfig {
            footer_prefix: "Somme\t".into(),
            ..MergeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddedToken { field: "footer_prefix", .. })
        ));
    }

    #[test]
    fn yaml_round_trip() {
        let mut config = MergeConfig::default();
        config.destination_sheet = Some("Suivi".into());
        let yaml = config.to_yaml().unwrap();
        assert_eq!(MergeConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
