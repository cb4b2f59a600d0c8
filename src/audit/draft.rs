use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::questions::{AnswerSet, Step};
use super::session::FormSession;
use crate::storage::{self, KeyValueStore, StorageError};

/// What survives a page reload: the answers so far and the step they were on.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    pub form_data: AnswerSet,
    pub current_step: usize,
}

#[derive(Debug, Error)]
pub enum DraftError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("draft points at step {0}, which is not an audit step")]
    StepOutOfRange(usize),
}

pub struct DraftStore<S> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    /// Persists the session while it is between the contact screen and the
    /// confirmation screen; anything else is ignored.
    pub fn save(&self, session: &FormSession) {
        if !session.step.is_mid_flow() {
            return;
        }
        let record = DraftRecord {
            form_data: session.answers.clone(),
            current_step: session.step.index(),
        };
        if let Err(e) = storage::write_json(&self.store, self.key, &record) {
            warn!("Could not save audit draft: {}", e);
        }
    }

    /// Fails open: an unreadable draft is logged and treated as absent.
    pub fn load(&self) -> Option<DraftRecord> {
        match self.try_load() {
            Ok(record) => record,
            Err(e) => {
                warn!("Discarding audit draft: {}", e);
                None
            }
        }
    }

    fn try_load(&self) -> Result<Option<DraftRecord>, DraftError> {
        let Some(record) = storage::read_json::<S, DraftRecord>(&self.store, self.key)? else {
            return Ok(None);
        };
        // Only audit steps are ever saved; anything else would reopen the
        // wizard on the contact or confirmation screen with a stale draft.
        match Step::from_index(record.current_step) {
            Some(step) if step.is_mid_flow() => {}
            _ => return Err(DraftError::StepOutOfRange(record.current_step)),
        }
        Ok(Some(record))
    }

    pub fn clear(&self) {
        if let Err(e) = self.store.remove_item(self.key) {
            warn!("Could not clear audit draft: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::questions::FieldId;
    use crate::storage::memory::MemoryStore;

    const KEY: &str = "draft";

    fn store() -> (MemoryStore, DraftStore<MemoryStore>) {
        let mem = MemoryStore::default();
        (mem.clone(), DraftStore::new(mem, KEY))
    }

    #[test]
    fn mid_flow_session_round_trips() {
        let (_, drafts) = store();
        let mut session = FormSession::default();
        session.step = Step::from_index(2).unwrap();
        session.answers.set(FieldId::Name, "Jane Doe".into());
        session.answers.set(FieldId::RfqsPerDay, "10-20".into());
        drafts.save(&session);

        let record = drafts.load().unwrap();
        assert_eq!(record.current_step, 2);
        assert_eq!(record.form_data, session.answers);

        let restored = FormSession::start(&drafts);
        assert_eq!(restored.step, session.step);
        assert_eq!(restored.answers, session.answers);
        assert!(restored.resumed);
    }

    #[test]
    fn stored_json_uses_form_data_and_current_step() {
        let (mem, drafts) = store();
        let mut session = FormSession::default();
        session.step = Step::from_index(1).unwrap();
        session.answers.set(FieldId::Email, "jane@acme.com".into());
        drafts.save(&session);

        let raw: serde_json::Value = serde_json::from_str(&mem.raw(KEY).unwrap()).unwrap();
        assert_eq!(raw["currentStep"], 1);
        assert_eq!(raw["formData"]["email"], "jane@acme.com");
    }

    #[test]
    fn contact_and_confirmation_are_not_saved() {
        let (mem, drafts) = store();
        let mut session = FormSession::default();
        session.answers.set(FieldId::Name, "Jane".into());
        drafts.save(&session);
        assert!(mem.raw(KEY).is_none());

        session.step = Step::CONFIRMATION;
        drafts.save(&session);
        assert!(mem.raw(KEY).is_none());
    }

    #[test]
    fn corrupt_or_out_of_range_drafts_start_fresh() {
        let (mem, drafts) = store();
        mem.set_item(KEY, "{\"formData\": {\"name\": ").unwrap();
        assert!(drafts.load().is_none());
        let fresh = FormSession::start(&drafts);
        assert_eq!(fresh.step, Step::CONTACT);
        assert!(fresh.answers.is_empty());
        assert!(!fresh.resumed);

        mem.set_item(KEY, r#"{"formData":{},"currentStep":42}"#).unwrap();
        assert!(drafts.load().is_none());
    }

    #[test]
    fn drafts_outside_the_audit_steps_start_fresh() {
        let (mem, drafts) = store();
        for step in [Step::CONTACT, Step::CONFIRMATION] {
            let raw = format!(
                r#"{{"formData":{{"name":"Jane"}},"currentStep":{}}}"#,
                step.index()
            );
            mem.set_item(KEY, &raw).unwrap();
            assert!(drafts.load().is_none());

            let mut session = FormSession::start(&drafts);
            assert_eq!(session.step, Step::CONTACT);
            assert!(!session.resumed);
            assert!(session.answers.is_empty());

            // The stale record is replaced as soon as the user moves on.
            session.set_answer(FieldId::Name, "Jane".into(), &drafts);
            session.set_answer(FieldId::Email, "jane@acme.com".into(), &drafts);
            session.set_answer(FieldId::Company, "Acme".into(), &drafts);
            session.next(&drafts);
            assert_eq!(drafts.load().map(|r| r.current_step), Some(1));
        }
    }

    #[test]
    fn clear_removes_the_record() {
        let (mem, drafts) = store();
        let mut session = FormSession::default();
        session.step = Step::from_index(1).unwrap();
        drafts.save(&session);
        assert!(mem.raw(KEY).is_some());
        drafts.clear();
        assert!(mem.raw(KEY).is_none());
        assert!(drafts.load().is_none());
    }
}
