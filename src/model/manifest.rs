use serde_json::{Map, Value};

pub const MANIFEST_FILE: &str = "devcontainer-template.json";

/// The JSON object stored in a `devcontainer-template.json` file.
///
/// Only `id` and `version` are interpreted; every other key is carried
/// through untouched, in its original order.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateManifest {
    fields: Map<String, Value>,
}

/// What the `version` key currently holds.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionField<'a> {
    Missing,
    Text(&'a str),
    Other(&'a Value),
}

impl TemplateManifest {
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    pub fn id(&self) -> String {
        match self.fields.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(other) => other.to_string(),
            None => "unknown".to_string(),
        }
    }

    pub fn version(&self) -> VersionField<'_> {
        match self.fields.get("version") {
            None | Some(Value::Null) => VersionField::Missing,
            Some(Value::String(v)) if v.is_empty() => VersionField::Missing,
            Some(Value::String(v)) => VersionField::Text(v),
            Some(other) => VersionField::Other(other),
        }
    }

    pub fn set_version(&mut self, version: String) {
        self.fields.insert("version".to_string(), Value::String(version));
    }

    /// Pretty-printed with a two-space indent and a trailing newline.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut out = serde_json::to_string_pretty(&self.fields)?;
        out.push('\n');
        Ok(out)
    }
}
