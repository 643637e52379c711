use serde::Deserialize;

use crate::errors::GatewayError;

#[derive(Debug, Deserialize)]
pub struct ScanParams {
    pub target: String,
    #[serde(default)]
    pub scan_type: ScanType,
    #[serde(default)]
    pub version: bool,
    pub ports: Option<String>,
}

impl ScanParams {
    /// Endpoint preconditions, checked before any backend contact.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.target.trim().is_empty() {
            return Err(GatewayError::Validation(
                "`target` must not be empty".to_string(),
            ));
        }

        if self.scan_type == ScanType::Custom {
            match self.ports.as_deref() {
                Some(ports) if !ports.trim().is_empty() => {}
                _ => {
                    return Err(GatewayError::Validation(
                        "`ports` is required for custom scans".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScanType {
    #[default]
    All,
    Top10,
    Top100,
    Custom,
}

impl ScanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Top10 => "top10",
            Self::Top100 => "top100",
            Self::Custom => "custom",
        }
    }
}
