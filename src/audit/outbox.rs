use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::submit::{SubmissionClient, Transport};
use crate::storage::{self, KeyValueStore};

/// A webhook body that could not be delivered and waits for the next visit.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PendingDelivery {
    pub source: String,
    pub body: String,
    pub queued_at: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub delivered: usize,
    pub kept: usize,
}

/// Durable queue of failed submissions kept in local storage. The user never
/// sees it; it only narrows the window in which a lead can be lost.
pub struct Outbox<S> {
    store: S,
    key: &'static str,
    capacity: usize,
}

impl<S: KeyValueStore> Outbox<S> {
    pub fn new(store: S, key: &'static str, capacity: usize) -> Self {
        Self { store, key, capacity }
    }

    pub fn pending(&self) -> Vec<PendingDelivery> {
        match storage::read_json::<S, Vec<PendingDelivery>>(&self.store, self.key) {
            Ok(entries) => entries.unwrap_or_default(),
            Err(e) => {
                warn!("Dropping unreadable outbox: {}", e);
                Vec::new()
            }
        }
    }

    fn write(&self, entries: &[PendingDelivery]) {
        let result = if entries.is_empty() {
            self.store.remove_item(self.key)
        } else {
            storage::write_json(&self.store, self.key, entries)
        };
        if let Err(e) = result {
            warn!("Could not update outbox: {}", e);
        }
    }

    /// Queues a body; past capacity the oldest entries are dropped.
    pub fn push(&self, source: &str, body: String, now: DateTime<Utc>) {
        let mut entries = self.pending();
        entries.push(PendingDelivery {
            source: source.to_string(),
            body,
            queued_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        if entries.len() > self.capacity {
            let excess = entries.len() - self.capacity;
            warn!("Outbox full, dropping {} oldest submission(s)", excess);
            entries.drain(..excess);
        }
        self.write(&entries);
    }

    /// One attempt per queued entry. Entries queued while the flush is running
    /// are preserved.
    pub async fn flush<T: Transport>(&self, client: &SubmissionClient<T>) -> FlushReport {
        let queued = self.pending();
        if queued.is_empty() {
            return FlushReport::default();
        }
        info!("Retrying {} queued submission(s)", queued.len());

        let mut delivered = Vec::new();
        for entry in &queued {
            if client.deliver_body(entry.body.clone()).await.is_delivered() {
                delivered.push(entry.clone());
            }
        }

        let remaining: Vec<PendingDelivery> = self
            .pending()
            .into_iter()
            .filter(|e| !delivered.contains(e))
            .collect();
        self.write(&remaining);
        FlushReport {
            delivered: delivered.len(),
            kept: remaining.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::submit::mock::MockTransport;
    use crate::audit::submit::StatusPolicy;
    use crate::storage::memory::MemoryStore;
    use futures::executor::block_on;

    const KEY: &str = "outbox";

    #[test]
    fn push_respects_capacity() {
        let outbox = Outbox::new(MemoryStore::default(), KEY, 2);
        for i in 0..3 {
            outbox.push("quick_contact", format!("{{\"n\":{}}}", i), Utc::now());
        }
        let bodies: Vec<String> = outbox.pending().into_iter().map(|e| e.body).collect();
        assert_eq!(bodies, vec!["{\"n\":1}".to_string(), "{\"n\":2}".to_string()]);
    }

    #[test]
    fn flush_keeps_only_undelivered_entries() {
        let mem = MemoryStore::default();
        let outbox = Outbox::new(mem.clone(), KEY, 10);
        outbox.push("revenue_leak_audit", "{}".into(), Utc::now());

        let offline = SubmissionClient::new("u", StatusPolicy::Tolerant, MockTransport::offline());
        let report = block_on(outbox.flush(&offline));
        assert_eq!(report, FlushReport { delivered: 0, kept: 1 });

        let online = MockTransport::replying(200);
        let client = SubmissionClient::new("u", StatusPolicy::Tolerant, online.clone());
        let report = block_on(outbox.flush(&client));
        assert_eq!(report, FlushReport { delivered: 1, kept: 0 });
        assert_eq!(online.call_count(), 1);
        assert!(mem.raw(KEY).is_none());

        assert_eq!(block_on(outbox.flush(&client)), FlushReport::default());
        assert_eq!(online.call_count(), 1);
    }

    #[test]
    fn corrupt_outbox_reads_as_empty() {
        let mem = MemoryStore::default();
        mem.set_item(KEY, "[{oops").unwrap();
        let outbox = Outbox::new(mem, KEY, 10);
        assert!(outbox.pending().is_empty());
    }
}
