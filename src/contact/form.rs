use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder sent to the email template when no phone number was given.
pub const PHONE_PLACEHOLDER: &str = "Not provided";

/// Editable inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// Value used for the `id`/`for` attributes of the rendered input.
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

/// Where a validation or submission message is displayed.
///
/// `General` is not tied to an input; it carries phone-format problems and
/// failures reported by the mail provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSlot {
    Name,
    Email,
    Message,
    General,
}

impl fmt::Display for ErrorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorSlot::Name => "name",
            ErrorSlot::Email => "email",
            ErrorSlot::Message => "message",
            ErrorSlot::General => "general",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Messages produced by the most recent validation pass or submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<ErrorSlot, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: ErrorSlot) -> Option<&str> {
        self.0.get(&slot).map(String::as_str)
    }

    pub fn contains(&self, slot: ErrorSlot) -> bool {
        self.0.contains_key(&slot)
    }

    /// Records a message for `slot`, replacing any earlier one.
    pub fn insert(&mut self, slot: ErrorSlot, message: impl Into<String>) {
        self.0.insert(slot, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorSlot, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Template parameters handed to the mailer: trimmed form values, with the
/// phone placeholder filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl From<&FormData> for ContactParams {
    fn from(data: &FormData) -> Self {
        let phone = data.phone.trim();
        Self {
            name: data.name.trim().to_string(),
            email: data.email.trim().to_string(),
            phone: if phone.is_empty() {
                PHONE_PLACEHOLDER.to_string()
            } else {
                phone.to_string()
            },
            message: data.message.trim().to_string(),
        }
    }
}

impl From<&ContactParams> for FormData {
    fn from(params: &ContactParams) -> Self {
        Self {
            name: params.name.clone(),
            email: params.email.clone(),
            phone: if params.phone == PHONE_PLACEHOLDER {
                String::new()
            } else {
                params.phone.clone()
            },
            message: params.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_fields() {
        let mut data = FormData::default();
        assert!(data.is_empty());

        data.set(Field::Name, "Ana".to_string());
        data.set(Field::Message, "hello".to_string());
        assert_eq!(data.get(Field::Name), "Ana");
        assert_eq!(data.get(Field::Message), "hello");
        assert_eq!(data.get(Field::Email), "");
        assert!(!data.is_empty());

        data.clear();
        assert!(data.is_empty());
    }

    #[test]
    fn test_params_trim_and_placeholder() {
        let data = FormData {
            name: "  Ana  ".to_string(),
            email: " ana@example.com ".to_string(),
            phone: "   ".to_string(),
            message: " Hola, quiero hablar ".to_string(),
        };
        let params = ContactParams::from(&data);
        assert_eq!(params.name, "Ana");
        assert_eq!(params.email, "ana@example.com");
        assert_eq!(params.phone, PHONE_PLACEHOLDER);
        assert_eq!(params.message, "Hola, quiero hablar");

        // The placeholder maps back to an absent phone
        let back = FormData::from(&params);
        assert_eq!(back.phone, "");
    }

    #[test]
    fn test_errors_replace_per_slot() {
        let mut errors = FormErrors::new();
        errors.insert(ErrorSlot::General, "first");
        errors.insert(ErrorSlot::General, "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(ErrorSlot::General), Some("second"));
        assert!(!errors.contains(ErrorSlot::Name));
    }
}
