//! One-screen forms that share the wizard's submission path: the quick
//! contact modal and the "book a call" form on the confirmation screen.

use log::warn;
use serde::{Deserialize, Serialize};

use super::validate::is_valid_email;
use crate::storage::{self, KeyValueStore};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct QuickContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl QuickContact {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && is_valid_email(&self.email)
            && !self.message.trim().is_empty()
    }

    /// Raw form data as left in storage, if any and if readable.
    pub fn load_draft<S: KeyValueStore>(store: &S, key: &str) -> QuickContact {
        match storage::read_json::<S, QuickContact>(store, key) {
            Ok(draft) => draft.unwrap_or_default(),
            Err(e) => {
                warn!("Discarding quick contact draft: {}", e);
                QuickContact::default()
            }
        }
    }

    pub fn save_draft<S: KeyValueStore>(&self, store: &S, key: &str) {
        if let Err(e) = storage::write_json(store, key, self) {
            warn!("Could not save quick contact draft: {}", e);
        }
    }

    pub fn clear_draft<S: KeyValueStore>(store: &S, key: &str) {
        if let Err(e) = store.remove_item(key) {
            warn!("Could not clear quick contact draft: {}", e);
        }
    }
}

/// Follow-up request sent from the confirmation screen, tied to the audit
/// contact details.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct CallbackRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
}

impl CallbackRequest {
    pub fn is_complete(&self) -> bool {
        let digits = self.phone.chars().filter(char::is_ascii_digit).count();
        digits >= 7 && is_valid_email(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    #[test]
    fn quick_contact_needs_every_field() {
        let mut form = QuickContact {
            name: "Jane".into(),
            email: "jane@acme.com".into(),
            message: "".into(),
        };
        assert!(!form.is_complete());
        form.message = "Call me".into();
        assert!(form.is_complete());
        form.email = "jane@acme".into();
        assert!(!form.is_complete());
    }

    #[test]
    fn quick_contact_draft_round_trips_and_clears() {
        let store = MemoryStore::default();
        let form = QuickContact {
            name: "Jane".into(),
            email: "jane@".into(),
            message: "half typed".into(),
        };
        form.save_draft(&store, "qc");
        assert_eq!(QuickContact::load_draft(&store, "qc"), form);

        QuickContact::clear_draft(&store, "qc");
        assert_eq!(QuickContact::load_draft(&store, "qc"), QuickContact::default());

        store.set_item("qc", "garbage").unwrap();
        assert_eq!(QuickContact::load_draft(&store, "qc"), QuickContact::default());
    }

    #[test]
    fn callback_needs_a_phone_number() {
        let mut request = CallbackRequest {
            email: "jane@acme.com".into(),
            phone: "+44 20".into(),
            ..CallbackRequest::default()
        };
        assert!(!request.is_complete());
        request.phone = "+44 20 7946 0000".into();
        assert!(request.is_complete());
    }
}
