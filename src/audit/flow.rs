use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use log::{error, info};
use serde::Serialize;

use super::draft::DraftStore;
use super::outbox::Outbox;
use super::questions::AnswerSet;
use super::session::FormSession;
use super::submit::{BrowserTransport, Delivery, Envelope, SubmissionClient, Transport};
use crate::config::{self, Timings};
use crate::storage::{KeyValueStore, LocalStorage};

pub fn browser_drafts() -> DraftStore<LocalStorage> {
    DraftStore::new(LocalStorage, config::AUDIT_DRAFT_KEY)
}

pub fn browser_outbox() -> Outbox<LocalStorage> {
    Outbox::new(LocalStorage, config::OUTBOX_KEY, config::OUTBOX_CAPACITY)
}

pub fn webhook_client() -> SubmissionClient<BrowserTransport> {
    SubmissionClient::new(config::webhook_url(), config::status_policy(), BrowserTransport)
}

/// Sends the finished audit and moves the session to confirmation. The
/// outcome is returned for logging only; the user always lands on the
/// confirmation screen and the draft is always cleared.
pub async fn submit_audit<S, T>(
    session: &mut FormSession,
    drafts: &DraftStore<S>,
    outbox: Option<&Outbox<S>>,
    client: &SubmissionClient<T>,
    timezone: String,
    timings: &Timings,
) -> Delivery
where
    S: KeyValueStore,
    T: Transport,
{
    debug_assert!(session.submitting, "submit_audit without Advance::Submit");

    let payload: Envelope<AnswerSet> =
        Envelope::new(session.answers.clone(), config::source::AUDIT, timezone, Utc::now());
    let delivery = send(client, outbox, config::source::AUDIT, &payload).await;

    if timings.building_delay_ms > 0 {
        TimeoutFuture::new(timings.building_delay_ms).await;
    }
    session.finish_submission(drafts);
    delivery
}

/// The one-screen variant: a single POST, queued in the outbox if it fails.
pub async fn submit_single<S, T, F>(
    client: &SubmissionClient<T>,
    outbox: Option<&Outbox<S>>,
    source: &str,
    fields: F,
    timezone: String,
) -> Delivery
where
    S: KeyValueStore,
    T: Transport,
    F: Serialize,
{
    let payload = Envelope::new(fields, source, timezone, Utc::now());
    send(client, outbox, source, &payload).await
}

async fn send<S, T, P>(
    client: &SubmissionClient<T>,
    outbox: Option<&Outbox<S>>,
    source: &str,
    payload: &P,
) -> Delivery
where
    S: KeyValueStore,
    T: Transport,
    P: Serialize,
{
    let body = match serde_json::to_string(payload) {
        Ok(body) => body,
        Err(e) => {
            error!("Could not encode {} submission: {}", source, e);
            return Delivery::Failed(e.into());
        }
    };
    let delivery = client.deliver_body(body.clone()).await;
    if !delivery.is_delivered() {
        if let Some(outbox) = outbox {
            info!("Queueing {} submission for a later retry", source);
            outbox.push(source, body, Utc::now());
        }
    }
    delivery
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::contact::QuickContact;
    use crate::audit::questions::{FieldId, Step};
    use crate::audit::session::Advance;
    use crate::audit::submit::mock::MockTransport;
    use crate::audit::submit::StatusPolicy;
    use crate::storage::memory::MemoryStore;
    use futures::executor::block_on;

    const NO_DELAY: Timings = Timings {
        building_delay_ms: 0,
        resume_notice_ms: 0,
        close_after_quick_contact_ms: 0,
    };

    fn ready_to_submit(drafts: &DraftStore<MemoryStore>) -> FormSession {
        let mut session = FormSession::start(drafts);
        session.set_answer(FieldId::Name, "Jane Doe".into(), drafts);
        session.set_answer(FieldId::Email, "jane@acme.com".into(), drafts);
        session.set_answer(FieldId::Company, "Acme Ltd".into(), drafts);
        loop {
            if session.step.is_audit() {
                for f in session.step.fields().iter().filter(|f| f.required) {
                    session.set_answer(f.id, "x".into(), drafts);
                }
            }
            match session.next(drafts) {
                Advance::Moved(_) => continue,
                Advance::Submit => return session,
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    fn run(transport: MockTransport) -> (FormSession, MemoryStore, Delivery) {
        let mem = MemoryStore::default();
        let drafts = DraftStore::new(mem.clone(), "draft");
        let outbox = Outbox::new(mem.clone(), "outbox", 10);
        let mut session = ready_to_submit(&drafts);
        assert!(drafts.load().is_some());

        let client = SubmissionClient::new("https://hook.test", StatusPolicy::Tolerant, transport);
        let delivery = block_on(submit_audit(
            &mut session,
            &drafts,
            Some(&outbox),
            &client,
            "Europe/London".into(),
            &NO_DELAY,
        ));
        (session, mem, delivery)
    }

    #[test]
    fn successful_submission_confirms_and_clears_draft() {
        let transport = MockTransport::replying(200);
        let (session, mem, delivery) = run(transport.clone());
        assert!(delivery.is_delivered());
        assert_eq!(transport.call_count(), 1);
        assert_eq!(session.step, Step::CONFIRMATION);
        assert!(!session.submitting);
        assert!(mem.raw("draft").is_none());
        assert!(mem.raw("outbox").is_none());

        let body: serde_json::Value =
            serde_json::from_str(&transport.calls.borrow()[0].1).unwrap();
        assert_eq!(body["company"], "Acme Ltd");
        assert_eq!(body["source"], "revenue_leak_audit");
        assert_eq!(body["timezone"], "Europe/London");
    }

    #[test]
    fn failed_submission_still_confirms_and_queues_payload() {
        let transport = MockTransport::offline();
        let (session, mem, delivery) = run(transport.clone());
        assert!(matches!(delivery, Delivery::Failed(_)));
        assert_eq!(transport.call_count(), 1);
        assert_eq!(session.step, Step::CONFIRMATION);
        assert!(mem.raw("draft").is_none());

        let outbox = Outbox::new(mem, "outbox", 10);
        let pending = outbox.pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].source, "revenue_leak_audit");
        assert_eq!(pending[0].body, transport.calls.borrow()[0].1);
    }

    #[test]
    fn single_step_form_uses_same_envelope() {
        let transport = MockTransport::replying(200);
        let client = SubmissionClient::new("u", StatusPolicy::Tolerant, transport.clone());
        let form = QuickContact {
            name: "Jane".into(),
            email: "jane@acme.com".into(),
            message: "Hello".into(),
        };
        let delivery = block_on(submit_single::<MemoryStore, _, _>(
            &client,
            None,
            config::source::QUICK_CONTACT,
            form,
            "UTC".into(),
        ));
        assert!(delivery.is_delivered());
        let body: serde_json::Value =
            serde_json::from_str(&transport.calls.borrow()[0].1).unwrap();
        assert_eq!(body["message"], "Hello");
        assert_eq!(body["source"], "quick_contact");
        assert_eq!(body["report_email"], config::REPORT_EMAIL);
    }

    #[test]
    fn unencodable_payload_is_never_sent_or_queued() {
        use crate::audit::submit::SubmitError;
        use std::collections::BTreeMap;

        let transport = MockTransport::replying(200);
        let client = SubmissionClient::new("u", StatusPolicy::Tolerant, transport.clone());
        let mem = MemoryStore::default();
        let outbox = Outbox::new(mem.clone(), "outbox", 10);
        // JSON object keys must be strings.
        let fields: BTreeMap<(u8, u8), String> = [((1, 2), "x".to_string())].into_iter().collect();

        let delivery = block_on(submit_single(
            &client,
            Some(&outbox),
            config::source::QUICK_CONTACT,
            fields,
            "UTC".into(),
        ));
        assert!(matches!(delivery, Delivery::Failed(SubmitError::Encode(_))));
        assert_eq!(transport.call_count(), 0);
        assert!(mem.raw("outbox").is_none());
    }
}
