use crate::audit::submit::StatusPolicy;

/// Compiled-in endpoint; a `WEBHOOK_URL` set at build time takes precedence.
const DEFAULT_WEBHOOK_URL: &str =
    "https://thraiv.app.n8n.cloud/webhook/d575402f-771d-4ca1-ad04-4632c7171d5f";

pub fn webhook_url() -> &'static str {
    option_env!("WEBHOOK_URL").unwrap_or(DEFAULT_WEBHOOK_URL)
}

// Every submission carries this so the workflow knows who gets the report.
pub const REPORT_EMAIL: &str = "joseph@thraiv.co.uk";

pub mod source {
    pub const AUDIT: &str = "revenue_leak_audit";
    pub const QUICK_CONTACT: &str = "quick_contact";
    pub const CALLBACK: &str = "audit_callback";
}

pub const AUDIT_DRAFT_KEY: &str = "thraiv_audit_draft";
pub const QUICK_CONTACT_DRAFT_KEY: &str = "thraiv_quick_contact_draft";
pub const OUTBOX_KEY: &str = "thraiv_outbox";
pub const OUTBOX_CAPACITY: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timings {
    /// Holding animation shown after the POST, before the confirmation step.
    pub building_delay_ms: u32,
    pub resume_notice_ms: u32,
    pub close_after_quick_contact_ms: u32,
}

pub const TIMINGS: Timings = Timings {
    building_delay_ms: 2_500,
    resume_notice_ms: 5_000,
    close_after_quick_contact_ms: 4_000,
};

#[cfg(debug_assertions)]
pub fn status_policy() -> StatusPolicy {
    StatusPolicy::Strict // Surface a misconfigured webhook while developing
}

#[cfg(not(debug_assertions))]
pub fn status_policy() -> StatusPolicy {
    StatusPolicy::Tolerant
}
