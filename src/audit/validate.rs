use std::collections::BTreeMap;

use strsim::damerau_levenshtein;
use thiserror::Error;

use super::questions::{AnswerSet, FieldDefinition, FieldId, FieldKind, Step};

/// Mailbox providers we offer typo corrections for.
pub const COMMON_DOMAINS: &[&str] = &[
    "gmail.com",
    "outlook.com",
    "hotmail.com",
    "yahoo.com",
    "icloud.com",
    "btinternet.com",
];

/// Real providers that sit close to a common one ("ymail" vs "gmail") and are
/// never corrected.
const KNOWN_DOMAINS: &[&str] = &[
    "ymail.com",
    "email.com",
    "gmx.com",
    "gmx.co.uk",
    "googlemail.com",
    "hotmail.co.uk",
    "outlook.co.uk",
    "yahoo.co.uk",
    "btopenworld.com",
    "live.com",
    "live.co.uk",
    "mail.com",
    "me.com",
    "mac.com",
    "aol.com",
];

// Edits allowed between a typed domain and the provider it gets corrected to.
const MAX_DOMAIN_EDITS: usize = 2;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the domain.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.starts_with('.') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn check_field(field: &FieldDefinition, value: &str) -> Result<(), FieldError> {
    if !field.required {
        return Ok(());
    }
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    if field.kind == FieldKind::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

pub fn is_field_valid(field: &FieldDefinition, value: &str) -> bool {
    check_field(field, value).is_ok()
}

/// Suggests a corrected address when the domain looks like a mistyped common
/// provider ("gmial.com"). Never blocks; `None` when nothing looks off.
pub fn suggest_email(value: &str) -> Option<String> {
    let value = value.trim();
    if !is_valid_email(value) {
        return None;
    }
    let (local, domain) = value.split_once('@')?;
    let domain = domain.to_ascii_lowercase();
    if COMMON_DOMAINS.contains(&domain.as_str()) || KNOWN_DOMAINS.contains(&domain.as_str()) {
        return None;
    }
    let head: String = domain.chars().take(3).collect();
    if head.chars().count() < 3 {
        return None;
    }

    COMMON_DOMAINS
        .iter()
        .filter(|candidate| damerau_levenshtein(&head, &candidate[..3]) <= 1)
        .map(|candidate| (damerau_levenshtein(&domain, candidate), *candidate))
        .filter(|(edits, _)| *edits <= MAX_DOMAIN_EDITS)
        .min_by_key(|(edits, _)| *edits)
        .map(|(_, candidate)| format!("{}@{}", local, candidate))
}

pub fn step_errors(answers: &AnswerSet, step: Step) -> BTreeMap<FieldId, FieldError> {
    step.fields()
        .iter()
        .filter_map(|f| check_field(f, answers.get(f.id)).err().map(|e| (f.id, e)))
        .collect()
}

pub fn is_step_complete(answers: &AnswerSet, step: Step) -> bool {
    if step.is_confirmation() {
        return false;
    }
    step_errors(answers, step).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::questions::{field, AUDIT_STEPS};

    fn email_field() -> &'static FieldDefinition {
        field(FieldId::Email).unwrap()
    }

    #[test]
    fn email_shape() {
        for ok in ["jane@acme.com", "a.b+c@mail.acme.co.uk", "  jane@acme.com "] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in [
            "",
            "jane",
            "jane@",
            "@acme.com",
            "jane@acme",
            "jane@acme.",
            "jane@.com",
            "jane@@acme.com",
            "ja ne@acme.com",
            "jane@ac@me.com",
        ] {
            assert!(!is_valid_email(bad), "{bad}");
            assert!(!is_field_valid(email_field(), bad), "{bad}");
        }
    }

    #[test]
    fn required_and_optional_fields() {
        let name = field(FieldId::Name).unwrap();
        assert_eq!(check_field(name, "   "), Err(FieldError::Required));
        assert_eq!(check_field(email_field(), "nope"), Err(FieldError::InvalidEmail));
        assert_eq!(check_field(email_field(), ""), Err(FieldError::Required));

        let optional = field(FieldId::AverageOrderValue).unwrap();
        assert!(is_field_valid(optional, ""));
        assert!(is_field_valid(optional, "anything at all"));
    }

    #[test]
    fn typo_suggestions_are_advisory() {
        assert_eq!(suggest_email("john@gmial.com").as_deref(), Some("john@gmail.com"));
        assert_eq!(suggest_email("john@hotmial.com").as_deref(), Some("john@hotmail.com"));
        assert_eq!(suggest_email("john@outlok.com").as_deref(), Some("john@outlook.com"));
        assert!(is_field_valid(email_field(), "john@gmial.com"));

        assert_eq!(suggest_email("john@gmail.com"), None);
        assert_eq!(suggest_email("john@GMAIL.com"), None);
        assert_eq!(suggest_email("john@acme.com"), None);
        assert_eq!(suggest_email("john@gmx.com"), None);
        assert_eq!(suggest_email("not-an-email"), None);
    }

    #[test]
    fn real_lookalike_providers_are_left_alone() {
        assert_eq!(suggest_email("a@ymail.com"), None);
        assert_eq!(suggest_email("a@email.com"), None);
        assert_eq!(suggest_email("a@Email.com"), None);
        assert_eq!(suggest_email("a@hotmail.co.uk"), None);
        // Near misses of a common provider are still caught.
        assert_eq!(suggest_email("a@gmai.com").as_deref(), Some("a@gmail.com"));
    }

    #[test]
    fn contact_step_needs_valid_email() {
        let mut answers = AnswerSet::default();
        assert!(!is_step_complete(&answers, Step::CONTACT));
        answers.set(FieldId::Name, "Jane Doe".into());
        answers.set(FieldId::Company, "Acme Ltd".into());
        answers.set(FieldId::Email, "jane@acme".into());
        assert!(!is_step_complete(&answers, Step::CONTACT));
        assert_eq!(
            step_errors(&answers, Step::CONTACT).get(&FieldId::Email),
            Some(&FieldError::InvalidEmail)
        );
        answers.set(FieldId::Email, "jane@acme.com".into());
        assert!(is_step_complete(&answers, Step::CONTACT));
    }

    #[test]
    fn audit_step_complete_iff_required_fields_filled() {
        for (i, def) in AUDIT_STEPS.iter().enumerate() {
            let step = Step::from_index(i + 1).unwrap();
            let mut answers = AnswerSet::default();
            assert!(!is_step_complete(&answers, step));

            for f in def.fields.iter().filter(|f| f.required) {
                answers.set(f.id, "x".into());
            }
            assert!(is_step_complete(&answers, step), "step {}", def.number);

            for f in def.fields.iter().filter(|f| f.required) {
                let mut blanked = answers.clone();
                blanked.set(f.id, "  ".into());
                assert!(!is_step_complete(&blanked, step));
            }
        }
        assert!(!is_step_complete(&AnswerSet::default(), Step::CONFIRMATION));
    }
}
