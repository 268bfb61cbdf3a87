use serde::{Deserialize, Serialize};

/// Input kind of a session default field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Link,
    Data,
    Select,
    Button,
}

/// One field of the session defaults prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDefaultField {
    pub fieldname: String,
    pub fieldtype: FieldType,
    pub label: String,
    /// Linked doctype for `Link`, newline separated choices for `Select`
    #[serde(default)]
    pub options: Option<String>,
    #[serde(default)]
    pub default: Option<String>,
}

impl SessionDefaultField {
    pub fn new(fieldname: impl Into<String>, fieldtype: FieldType, label: impl Into<String>) -> Self {
        Self {
            fieldname: fieldname.into(),
            fieldtype,
            label: label.into(),
            options: None,
            default: None,
        }
    }

    pub fn with_options(mut self, options: impl Into<String>) -> Self {
        self.options = Some(options.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn is_button(&self) -> bool {
        self.fieldtype == FieldType::Button
    }

    /// Choices of a `Select` field, empty lines dropped
    pub fn select_options(&self) -> Vec<String> {
        self.options
            .as_deref()
            .unwrap_or_default()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_options_skips_blank_lines() {
        let field = SessionDefaultField::new("currency", FieldType::Select, "Currency")
            .with_options("EUR\n\nUSD\n");
        assert_eq!(field.select_options(), vec!["EUR", "USD"]);
    }

    #[test]
    fn test_field_type_wire_format() {
        let json = serde_json::to_string(&FieldType::Link).unwrap();
        assert_eq!(json, "\"Link\"");
    }
}
