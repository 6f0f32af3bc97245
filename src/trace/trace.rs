use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Serialize)]
pub struct TraceRecord {
    pub timestamp_ms: u128,

    #[serde(flatten)]
    pub event: TraceEvent,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    CatalogLoaded {
        source: String,
        records: usize,
    },

    OptionsBuilt {
        kind: String,
        total: usize,
        duplicates: usize,
        fingerprint: String,
    },

    TokenResolved {
        token: String,
        stored: String,
        hit: bool,
    },

    AuditCompleted {
        kinds: usize,
        collision_groups: usize,
        clean: bool,
    },
}

impl TraceRecord {
    pub fn now(event: TraceEvent) -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);

        Self {
            timestamp_ms,
            event,
        }
    }
}
