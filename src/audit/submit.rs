use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::Request;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::js_sys;

use crate::config;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("network error: {0}")]
    Network(String),
}

/// Form fields plus the metadata every webhook submission carries.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Envelope<T> {
    #[serde(flatten)]
    pub fields: T,
    pub report_email: String,
    pub timestamp: String,
    pub source: String,
    pub timezone: String,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(fields: T, source: &str, timezone: String, now: DateTime<Utc>) -> Self {
        Self {
            fields,
            report_email: config::REPORT_EMAIL.to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            source: source.to_string(),
            timezone,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Any HTTP response counts as delivered.
    Tolerant,
    /// Only 2xx counts as delivered.
    Strict,
}

impl StatusPolicy {
    fn accepts(self, status: u16) -> bool {
        match self {
            StatusPolicy::Tolerant => true,
            StatusPolicy::Strict => (200..300).contains(&status),
        }
    }
}

#[derive(Debug)]
pub enum Delivery {
    Delivered(u16),
    Rejected(u16),
    Failed(SubmitError),
}

impl Delivery {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Delivery::Delivered(_))
    }
}

/// One outbound JSON POST. Returns the HTTP status on any response.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, SubmitError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, SubmitError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        Ok(response.status())
    }
}

/// Single-attempt webhook client: no retry, no backoff, no idempotency key.
pub struct SubmissionClient<T> {
    endpoint: String,
    policy: StatusPolicy,
    transport: T,
}

impl<T: Transport> SubmissionClient<T> {
    pub fn new(endpoint: &str, policy: StatusPolicy, transport: T) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            policy,
            transport,
        }
    }

    pub async fn deliver_body(&self, body: String) -> Delivery {
        match self.transport.post_json(&self.endpoint, body).await {
            Ok(status) if self.policy.accepts(status) => {
                info!("Webhook accepted submission ({})", status);
                Delivery::Delivered(status)
            }
            Ok(status) => {
                warn!("Webhook rejected submission with status {}", status);
                Delivery::Rejected(status)
            }
            Err(e) => {
                error!("Webhook submission failed: {}", e);
                Delivery::Failed(e)
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolvedOptions {
    time_zone: Option<String>,
}

/// IANA zone the browser reports, or "UTC" when it reports nothing usable.
pub fn browser_timezone() -> String {
    let options = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new())
        .resolved_options();
    let reported = serde_wasm_bindgen::from_value::<ResolvedOptions>(JsValue::from(options))
        .ok()
        .and_then(|o| o.time_zone);
    normalize_timezone(reported.as_deref())
}

fn normalize_timezone(reported: Option<&str>) -> String {
    match reported.map(str::parse::<chrono_tz::Tz>) {
        Some(Ok(tz)) => tz.name().to_string(),
        _ => "UTC".to_string(),
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::{SubmitError, Transport};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every POST and answers with a fixed status, or a network error
    /// when `status` is `None`.
    #[derive(Clone, Default)]
    pub struct MockTransport {
        pub status: Option<u16>,
        pub calls: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl MockTransport {
        pub fn replying(status: u16) -> Self {
            Self {
                status: Some(status),
                ..Self::default()
            }
        }

        pub fn offline() -> Self {
            Self::default()
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl Transport for MockTransport {
        async fn post_json(&self, url: &str, body: String) -> Result<u16, SubmitError> {
            self.calls.borrow_mut().push((url.to_string(), body));
            self.status
                .ok_or_else(|| SubmitError::Network("connection refused".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;
    use crate::audit::questions::AnswerSet;
    use chrono::TimeZone;
    use futures::executor::block_on;

    fn envelope() -> Envelope<AnswerSet> {
        let mut answers = AnswerSet::default();
        answers.name = "Jane Doe".into();
        answers.email = "jane@acme.com".into();
        answers.rfqs_per_day = "10-20".into();
        let now = Utc.with_ymd_and_hms(2026, 3, 4, 9, 30, 0).unwrap();
        Envelope::new(answers, config::source::AUDIT, "Europe/London".into(), now)
    }

    fn body() -> String {
        serde_json::to_string(&envelope()).unwrap()
    }

    #[test]
    fn payload_is_flat_json_with_metadata() {
        let json = serde_json::to_value(envelope()).unwrap();
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["rfqs_per_day"], "10-20");
        assert_eq!(json["average_order_value"], "");
        assert_eq!(json["report_email"], config::REPORT_EMAIL);
        assert_eq!(json["timestamp"], "2026-03-04T09:30:00.000Z");
        assert_eq!(json["source"], "revenue_leak_audit");
        assert_eq!(json["timezone"], "Europe/London");
        assert!(json.get("fields").is_none());
    }

    #[test]
    fn sends_exactly_one_post_to_the_endpoint() {
        let transport = MockTransport::replying(200);
        let client = SubmissionClient::new("https://hook.test/x", StatusPolicy::Tolerant, transport.clone());
        let delivery = block_on(client.deliver_body(body()));
        assert!(delivery.is_delivered());
        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://hook.test/x");
        let body: serde_json::Value = serde_json::from_str(&calls[0].1).unwrap();
        assert_eq!(body["email"], "jane@acme.com");
    }

    #[test]
    fn status_policies() {
        let tolerant = SubmissionClient::new("u", StatusPolicy::Tolerant, MockTransport::replying(500));
        assert!(matches!(block_on(tolerant.deliver_body(body())), Delivery::Delivered(500)));

        let strict = SubmissionClient::new("u", StatusPolicy::Strict, MockTransport::replying(500));
        assert!(matches!(block_on(strict.deliver_body(body())), Delivery::Rejected(500)));

        let strict_ok = SubmissionClient::new("u", StatusPolicy::Strict, MockTransport::replying(204));
        assert!(block_on(strict_ok.deliver_body(body())).is_delivered());
    }

    #[test]
    fn network_errors_are_reported_not_retried() {
        let transport = MockTransport::offline();
        let client = SubmissionClient::new("u", StatusPolicy::Tolerant, transport.clone());
        let delivery = block_on(client.deliver_body(body()));
        assert!(matches!(delivery, Delivery::Failed(SubmitError::Network(_))));
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn unknown_timezones_fall_back_to_utc() {
        assert_eq!(normalize_timezone(Some("Europe/London")), "Europe/London");
        assert_eq!(normalize_timezone(Some("Mars/Olympus_Mons")), "UTC");
        assert_eq!(normalize_timezone(None), "UTC");
    }
}
