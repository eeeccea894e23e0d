use crate::domain::model::StationProfile;
use crate::utils::error::ProfileError;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Json,
    Toml,
}

impl ProfileFormat {
    /// `.toml` selects TOML; every other extension is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

impl StationProfile {
    pub fn from_bytes(bytes: &[u8], format: ProfileFormat) -> Result<Self, ProfileError> {
        let text = std::str::from_utf8(bytes)?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        match format {
            ProfileFormat::Json => Self::from_json_str(text),
            ProfileFormat::Toml => Self::from_toml_str(text),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self, ProfileError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let map = match value {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(ProfileError::NotAnObject {
                    found: json_kind(&other),
                })
            }
        };
        Ok(Self::from_fields(
            map.into_iter().map(|(k, v)| (k, json_text(v))),
        ))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ProfileError> {
        let table: toml::Table = toml::from_str(content)?;
        Ok(Self::from_fields(
            table.into_iter().map(|(k, v)| (k, toml_text(v))),
        ))
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

fn json_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn toml_text(value: toml::Value) -> String {
    match value {
        toml::Value::String(s) => s,
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(d) => d.to_string(),
        other => other.to_string(),
    }
}
