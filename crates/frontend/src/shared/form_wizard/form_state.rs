use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("{field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// One declared input of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
    pub default: &'static str,
    pub required: bool,
}

impl FieldDef {
    pub const fn optional(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            default: "",
            required: false,
        }
    }

    pub const fn required(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            default: "",
            required: true,
        }
    }

    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct FormDefinition {
    /// Key of the draft in the global form store
    pub form_key: &'static str,
    pub fields: &'static [FieldDef],
}

impl FormDefinition {
    pub fn field(&self, key: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.key == key)
    }
}

/// Field values of one form; the key set is fixed by the definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    definition: &'static FormDefinition,
    values: BTreeMap<&'static str, String>,
}

impl FormState {
    pub fn new(definition: &'static FormDefinition) -> Self {
        let values = definition
            .fields
            .iter()
            .map(|f| (f.key, f.default.to_string()))
            .collect();
        Self { definition, values }
    }

    /// Rebuild from a saved draft. Unknown keys and non-string values are
    /// dropped; missing keys keep their defaults.
    pub fn restore(definition: &'static FormDefinition, draft: &serde_json::Value) -> Self {
        let mut state = Self::new(definition);
        if let Some(map) = draft.as_object() {
            for (key, value) in map {
                if let Some(text) = value.as_str() {
                    let _ = state.set(key, text);
                }
            }
        }
        state
    }

    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .values
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.clone())))
            .collect();
        serde_json::Value::Object(map)
    }

    pub fn definition(&self) -> &'static FormDefinition {
        self.definition
    }

    /// Value of a field; empty for undeclared keys
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), FormError> {
        match self.values.get_mut(key) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(FormError::UnknownField(key.to_string())),
        }
    }

    /// Labels of required fields that are blank
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.definition
            .fields
            .iter()
            .filter(|f| f.required && self.get(f.key).trim().is_empty())
            .map(|f| f.label)
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        self.missing_required().is_empty()
    }

    pub fn text(&self, key: &str) -> Option<String> {
        let v = self.get(key).trim();
        if v.is_empty() {
            None
        } else {
            Some(v.to_string())
        }
    }

    /// Optional `yyyy-mm-dd` date (the value format of `<input type="date">`)
    pub fn date(&self, key: &'static str) -> Result<Option<NaiveDate>, FormError> {
        match self.text(key) {
            None => Ok(None),
            Some(v) => parse_date(&v).map(Some).ok_or_else(|| FormError::Invalid {
                field: self.label(key),
                reason: format!("'{}' is not a valid date", v),
            }),
        }
    }

    /// Optional non-negative amount; thousands separators and a leading £ are allowed
    pub fn amount(&self, key: &'static str) -> Result<Option<f64>, FormError> {
        match self.text(key) {
            None => Ok(None),
            Some(v) => match parse_amount(&v) {
                Some(n) if n >= 0.0 => Ok(Some(n)),
                Some(_) => Err(FormError::Invalid {
                    field: self.label(key),
                    reason: "must not be negative".into(),
                }),
                None => Err(FormError::Invalid {
                    field: self.label(key),
                    reason: format!("'{}' is not a number", v),
                }),
            },
        }
    }

    pub fn required_date(&self, key: &'static str) -> Result<NaiveDate, FormError> {
        self.date(key)?.ok_or_else(|| self.missing(key))
    }

    pub fn required_amount(&self, key: &'static str) -> Result<f64, FormError> {
        self.amount(key)?.ok_or_else(|| self.missing(key))
    }

    fn label(&self, key: &'static str) -> &'static str {
        self.definition.field(key).map(|f| f.label).unwrap_or(key)
    }

    fn missing(&self, key: &'static str) -> FormError {
        FormError::Invalid {
            field: self.label(key),
            reason: "is required".into(),
        }
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn parse_amount(value: &str) -> Option<f64> {
    let cleaned: String = value
        .trim()
        .trim_start_matches('£')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    static JOB: FormDefinition = FormDefinition {
        form_key: "test_job",
        fields: &[
            FieldDef::required("title", "Title"),
            FieldDef::required("client_id", "Client"),
            FieldDef::optional("priority", "Priority").with_default("medium"),
            FieldDef::optional("fee", "Fee"),
            FieldDef::optional("due_date", "Due date"),
        ],
    };

    #[test]
    fn test_empty_required_fields_block_submit() {
        let mut form = FormState::new(&JOB);
        form.set("title", "").unwrap();
        form.set("client_id", "").unwrap();
        assert!(!form.can_submit());
        assert_eq!(form.missing_required(), vec!["Title", "Client"]);

        form.set("title", "Year end accounts").unwrap();
        form.set("client_id", "  ").unwrap();
        assert_eq!(form.missing_required(), vec!["Client"]);

        form.set("client_id", "cl-7").unwrap();
        assert!(form.can_submit());
    }

    #[test]
    fn test_defaults_and_fixed_key_set() {
        let mut form = FormState::new(&JOB);
        assert_eq!(form.get("priority"), "medium");
        assert_eq!(
            form.set("colour", "red"),
            Err(FormError::UnknownField("colour".into()))
        );
        assert_eq!(form.get("colour"), "");
    }

    #[test]
    fn test_draft_restore() {
        let mut form = FormState::new(&JOB);
        form.set("title", "Payroll").unwrap();
        let draft = form.to_json();

        let restored = FormState::restore(&JOB, &draft);
        assert_eq!(restored, form);

        let noisy = serde_json::json!({"title": "VAT Q3", "extra": "x", "fee": 12});
        let restored = FormState::restore(&JOB, &noisy);
        assert_eq!(restored.get("title"), "VAT Q3");
        assert_eq!(restored.get("fee"), "");
        assert_eq!(restored.get("priority"), "medium");
    }

    #[test]
    fn test_typed_accessors() {
        let mut form = FormState::new(&JOB);
        assert_eq!(form.amount("fee"), Ok(None));

        form.set("fee", "£1,250.50").unwrap();
        assert_eq!(form.amount("fee"), Ok(Some(1250.5)));

        form.set("fee", "-3").unwrap();
        assert!(form.amount("fee").is_err());

        form.set("fee", "abc").unwrap();
        let err = form.required_amount("fee").unwrap_err();
        assert!(err.to_string().starts_with("Fee:"), "{}", err);

        form.set("due_date", "2026-10-31").unwrap();
        assert_eq!(form.date("due_date"), Ok(NaiveDate::from_ymd_opt(2026, 10, 31)));

        form.set("due_date", "31/10/2026").unwrap();
        assert!(form.date("due_date").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_non_finite() {
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount(" 1 000 "), Some(1000.0));
    }
}
