use std::collections::BTreeMap;

use log::info;

use super::draft::DraftStore;
use super::questions::{field, AnswerSet, FieldId, FieldKind, Step, AUDIT_STEPS};
use super::validate;
use crate::storage::KeyValueStore;

/// Result of pressing "next".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Current step has missing or invalid answers; errors are now populated.
    Blocked,
    Moved(Step),
    /// Last audit step is complete; the caller must submit and then call
    /// [`FormSession::finish_submission`].
    Submit,
    /// Submission already in flight, or nothing left to advance to.
    Busy,
}

/// One run through the audit wizard, from the contact screen to confirmation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSession {
    pub step: Step,
    pub answers: AnswerSet,
    pub errors: BTreeMap<FieldId, String>,
    pub suggestions: BTreeMap<FieldId, String>,
    pub submitting: bool,
    /// The session was rebuilt from a stored draft.
    pub resumed: bool,
}

impl FormSession {
    pub fn start<S: KeyValueStore>(drafts: &DraftStore<S>) -> Self {
        let mut session = FormSession::default();
        if let Some(record) = drafts.load() {
            if !record.form_data.is_empty() {
                info!("Resuming audit draft at step {}", record.current_step);
                session.step = Step::from_index(record.current_step).unwrap_or_default();
                session.answers = record.form_data;
                session.resumed = true;
                session.refresh_suggestion(FieldId::Email);
            }
        }
        session
    }

    fn locked(&self) -> bool {
        self.submitting || self.step.is_confirmation()
    }

    pub fn set_answer<S: KeyValueStore>(
        &mut self,
        id: FieldId,
        value: String,
        drafts: &DraftStore<S>,
    ) {
        if self.locked() {
            return;
        }
        self.answers.set(id, value);

        // Only errors already on screen are re-checked while typing.
        if let Some(def) = field(id) {
            match validate::check_field(def, self.answers.get(id)) {
                Ok(()) => {
                    self.errors.remove(&id);
                }
                Err(e) => {
                    if let Some(shown) = self.errors.get_mut(&id) {
                        *shown = e.to_string();
                    }
                }
            }
        }
        self.refresh_suggestion(id);
        drafts.save(self);
    }

    fn refresh_suggestion(&mut self, id: FieldId) {
        let is_email = field(id).map(|f| f.kind == FieldKind::Email).unwrap_or(false);
        if !is_email {
            return;
        }
        match validate::suggest_email(self.answers.get(id)) {
            Some(suggestion) => {
                self.suggestions.insert(id, suggestion);
            }
            None => {
                self.suggestions.remove(&id);
            }
        }
    }

    pub fn is_step_complete(&self, step: Step) -> bool {
        validate::is_step_complete(&self.answers, step)
    }

    /// Drives the disabled state of the "next" control on audit steps.
    pub fn is_current_audit_step_complete(&self) -> bool {
        self.step.is_audit() && self.is_step_complete(self.step)
    }

    pub fn next<S: KeyValueStore>(&mut self, drafts: &DraftStore<S>) -> Advance {
        if self.locked() {
            return Advance::Busy;
        }
        let errors = validate::step_errors(&self.answers, self.step);
        if !errors.is_empty() {
            for (id, e) in errors {
                self.errors.insert(id, e.to_string());
            }
            return Advance::Blocked;
        }
        if self.step.is_last_audit() {
            self.submitting = true;
            return Advance::Submit;
        }
        self.step = self.step.forward();
        drafts.save(self);
        Advance::Moved(self.step)
    }

    /// Returns whether the step changed.
    pub fn back<S: KeyValueStore>(&mut self, drafts: &DraftStore<S>) -> bool {
        if self.locked() || self.step.is_contact() {
            return false;
        }
        self.step = self.step.backward();
        drafts.save(self);
        true
    }

    /// Called once the webhook attempt is over, whatever its outcome.
    pub fn finish_submission<S: KeyValueStore>(&mut self, drafts: &DraftStore<S>) {
        self.submitting = false;
        self.step = Step::CONFIRMATION;
        self.errors.clear();
        drafts.clear();
    }

    pub fn progress_percent(&self) -> u32 {
        let total = AUDIT_STEPS.len() + 1;
        (self.step.index().min(total) * 100 / total) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    const KEY: &str = "draft";

    fn fixture() -> (MemoryStore, DraftStore<MemoryStore>, FormSession) {
        let mem = MemoryStore::default();
        let drafts = DraftStore::new(mem.clone(), KEY);
        let session = FormSession::start(&drafts);
        (mem, drafts, session)
    }

    fn fill_contact(session: &mut FormSession, drafts: &DraftStore<MemoryStore>) {
        session.set_answer(FieldId::Name, "Jane Doe".into(), drafts);
        session.set_answer(FieldId::Email, "jane@acme.com".into(), drafts);
        session.set_answer(FieldId::Company, "Acme Ltd".into(), drafts);
    }

    fn fill_required(session: &mut FormSession, drafts: &DraftStore<MemoryStore>) {
        for f in session.step.fields().iter().filter(|f| f.required) {
            session.set_answer(f.id, "x".into(), drafts);
        }
    }

    #[test]
    fn back_at_contact_is_a_no_op() {
        let (_, drafts, mut session) = fixture();
        for _ in 0..3 {
            assert!(!session.back(&drafts));
            assert_eq!(session.step, Step::CONTACT);
        }
    }

    #[test]
    fn contact_step_advances_and_persists_draft() {
        let (_, drafts, mut session) = fixture();
        fill_contact(&mut session, &drafts);
        assert!(drafts.load().is_none(), "contact step alone is not a draft");

        assert_eq!(session.next(&drafts), Advance::Moved(Step::from_index(1).unwrap()));
        let record = drafts.load().unwrap();
        assert_eq!(record.current_step, 1);
        assert_eq!(record.form_data.name, "Jane Doe");
        assert_eq!(record.form_data.email, "jane@acme.com");
        assert_eq!(record.form_data.company, "Acme Ltd");
    }

    #[test]
    fn incomplete_audit_step_blocks_next() {
        let (_, drafts, mut session) = fixture();
        fill_contact(&mut session, &drafts);
        session.next(&drafts);

        let step = session.step;
        for f in step.fields().iter().skip(1) {
            session.set_answer(f.id, "x".into(), &drafts);
        }
        assert!(!session.is_current_audit_step_complete());
        assert_eq!(session.next(&drafts), Advance::Blocked);
        assert_eq!(session.step, step);
        assert_eq!(
            session.errors.get(&step.fields()[0].id).map(String::as_str),
            Some("This field is required")
        );

        session.set_answer(step.fields()[0].id, "0-5".into(), &drafts);
        assert!(session.errors.is_empty());
        assert!(session.is_current_audit_step_complete());
    }

    #[test]
    fn last_step_requests_submission_once() {
        let (_, drafts, mut session) = fixture();
        fill_contact(&mut session, &drafts);
        session.next(&drafts);
        while !session.step.is_last_audit() {
            fill_required(&mut session, &drafts);
            assert!(matches!(session.next(&drafts), Advance::Moved(_)));
        }
        fill_required(&mut session, &drafts);

        let last = session.step;
        assert_eq!(session.next(&drafts), Advance::Submit);
        assert_eq!(session.step, last);
        assert!(session.submitting);
        assert_eq!(session.next(&drafts), Advance::Busy);
        assert!(!session.back(&drafts));

        session.finish_submission(&drafts);
        assert_eq!(session.step, Step::CONFIRMATION);
        assert!(!session.submitting);
        assert!(drafts.load().is_none());
        assert_eq!(session.next(&drafts), Advance::Busy);
        assert_eq!(session.progress_percent(), 100);
    }

    #[test]
    fn back_saves_the_earlier_step() {
        let (_, drafts, mut session) = fixture();
        fill_contact(&mut session, &drafts);
        session.next(&drafts);
        fill_required(&mut session, &drafts);
        session.next(&drafts);
        assert_eq!(drafts.load().unwrap().current_step, 2);

        assert!(session.back(&drafts));
        assert_eq!(drafts.load().unwrap().current_step, 1);
        // Stepping back onto the contact screen leaves the last mid-flow draft.
        assert!(session.back(&drafts));
        assert_eq!(session.step, Step::CONTACT);
        assert_eq!(drafts.load().unwrap().current_step, 1);
    }

    #[test]
    fn email_typo_is_suggested_without_blocking() {
        let (_, drafts, mut session) = fixture();
        session.set_answer(FieldId::Name, "John".into(), &drafts);
        session.set_answer(FieldId::Company, "Acme".into(), &drafts);
        session.set_answer(FieldId::Email, "john@gmial.com".into(), &drafts);
        assert_eq!(
            session.suggestions.get(&FieldId::Email).map(String::as_str),
            Some("john@gmail.com")
        );
        assert!(matches!(session.next(&drafts), Advance::Moved(_)));
    }

    #[test]
    fn invalid_email_blocks_contact_step() {
        let (_, drafts, mut session) = fixture();
        session.set_answer(FieldId::Name, "John".into(), &drafts);
        session.set_answer(FieldId::Company, "Acme".into(), &drafts);
        session.set_answer(FieldId::Email, "john@acme".into(), &drafts);
        assert_eq!(session.next(&drafts), Advance::Blocked);
        assert_eq!(
            session.errors.get(&FieldId::Email).map(String::as_str),
            Some("Please enter a valid email address")
        );
        assert_eq!(session.step, Step::CONTACT);
    }
}
