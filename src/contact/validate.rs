use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::form::{ErrorSlot, Field, FormData, FormErrors};

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

// Colombian mobile: optional country code, then ten digits starting with 3
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+57|57)?[\s-]?3[0-9]{9}$").expect("phone pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required(Field),
    MinLength(Field, usize),
    Format(Field),
}

impl Violation {
    /// Phone problems have no per-field slot and land in `General`.
    pub fn slot(&self) -> ErrorSlot {
        let field = match self {
            Violation::Required(f) | Violation::MinLength(f, _) | Violation::Format(f) => f,
        };
        match field {
            Field::Name => ErrorSlot::Name,
            Field::Email => ErrorSlot::Email,
            Field::Message => ErrorSlot::Message,
            Field::Phone => ErrorSlot::General,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required(Field::Name) => write!(f, "Name is required"),
            Violation::Required(Field::Email) => write!(f, "Email is required"),
            Violation::Required(Field::Message) => write!(f, "Message is required"),
            Violation::Required(Field::Phone) => write!(f, "Phone is required"),
            Violation::MinLength(Field::Name, n) => {
                write!(f, "Name must be at least {n} characters")
            }
            Violation::MinLength(Field::Message, n) => {
                write!(f, "Message must be at least {n} characters")
            }
            Violation::MinLength(field, n) => {
                write!(f, "{} must be at least {n} characters", field.id())
            }
            Violation::Format(Field::Email) => write!(f, "Enter a valid email address"),
            Violation::Format(Field::Phone) => write!(
                f,
                "Phone must be a valid Colombian mobile number (+57 300 123 4567)"
            ),
            Violation::Format(field) => write!(f, "{} has an invalid format", field.id()),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Empty input is valid since the phone is optional.
pub fn is_valid_phone(phone: &str) -> bool {
    if phone.is_empty() {
        return true;
    }
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

fn check_text(field: Field, value: &str, min_chars: usize) -> Option<Violation> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(Violation::Required(field))
    } else if trimmed.chars().count() < min_chars {
        Some(Violation::MinLength(field, min_chars))
    } else {
        None
    }
}

/// Runs every rule against `data` and returns all violations found.
pub fn violations(data: &FormData) -> Vec<Violation> {
    let mut found = Vec::new();

    found.extend(check_text(Field::Name, &data.name, NAME_MIN_CHARS));

    if data.email.trim().is_empty() {
        found.push(Violation::Required(Field::Email));
    } else if !is_valid_email(&data.email) {
        found.push(Violation::Format(Field::Email));
    }

    if !is_valid_phone(&data.phone) {
        found.push(Violation::Format(Field::Phone));
    }

    found.extend(check_text(Field::Message, &data.message, MESSAGE_MIN_CHARS));

    found
}

/// Builds a fresh error map from the current form contents.
pub fn validate(data: &FormData) -> FormErrors {
    let mut errors = FormErrors::new();
    for v in violations(data) {
        errors.insert(v.slot(), v.to_string());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormData {
        FormData {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: String::new(),
            message: "Me interesa tu trabajo".to_string(),
        }
    }

    #[test]
    fn test_empty_form_has_three_field_errors() {
        let errors = validate(&FormData::default());
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(ErrorSlot::Name));
        assert!(errors.contains(ErrorSlot::Email));
        assert!(errors.contains(ErrorSlot::Message));
        assert!(!errors.contains(ErrorSlot::General));
    }

    #[test]
    fn test_whitespace_only_is_required_violation() {
        let data = FormData {
            name: "   ".to_string(),
            message: "\t\n".to_string(),
            ..valid_form()
        };
        let found = violations(&data);
        assert!(found.contains(&Violation::Required(Field::Name)));
        assert!(found.contains(&Violation::Required(Field::Message)));
    }

    #[test]
    fn test_name_min_length() {
        let mut data = valid_form();
        data.name = "A".to_string();
        let errors = validate(&data);
        assert_eq!(
            errors.get(ErrorSlot::Name),
            Some("Name must be at least 2 characters")
        );

        data.name = "Al".to_string();
        assert!(!validate(&data).contains(ErrorSlot::Name));

        // Surrounding whitespace does not count
        data.name = " A ".to_string();
        assert!(validate(&data).contains(ErrorSlot::Name));
    }

    #[test]
    fn test_email_format() {
        let mut data = valid_form();
        data.email = "not-an-email".to_string();
        assert_eq!(
            validate(&data).get(ErrorSlot::Email),
            Some("Enter a valid email address")
        );

        data.email = "a@b.co".to_string();
        assert!(!validate(&data).contains(ErrorSlot::Email));

        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@bco"));
    }

    #[test]
    fn test_phone_rules() {
        assert!(is_valid_phone(""));
        assert!(is_valid_phone("3001234567"));
        assert!(is_valid_phone("+573001234567"));
        assert!(is_valid_phone("+57 300 123 4567"));
        assert!(is_valid_phone("57-3001234567"));
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("2001234567"));
        assert!(!is_valid_phone("+1 300 123 4567"));

        let mut data = valid_form();
        data.phone = "123".to_string();
        let errors = validate(&data);
        assert_eq!(errors.len(), 1);
        assert!(errors
            .get(ErrorSlot::General)
            .is_some_and(|m| m.contains("Colombian")));
    }

    #[test]
    fn test_message_min_length() {
        let mut data = valid_form();
        data.message = "123456789".to_string();
        assert_eq!(
            validate(&data).get(ErrorSlot::Message),
            Some("Message must be at least 10 characters")
        );

        data.message = "1234567890".to_string();
        assert!(validate(&data).is_empty());
    }

    #[test]
    fn test_length_counts_characters() {
        let mut data = valid_form();
        // 10 characters, more than 10 bytes
        data.message = "áéíóúáéíóú".to_string();
        assert!(!validate(&data).contains(ErrorSlot::Message));
    }

    #[test]
    fn test_all_rules_checked_together() {
        let data = FormData {
            name: "A".to_string(),
            email: "nope".to_string(),
            phone: "999".to_string(),
            message: "short".to_string(),
        };
        assert_eq!(validate(&data).len(), 4);
    }
}
