//! Test helpers: a recording stub relay and a router factory.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use portfolio::config::{Config, ObservabilityConfig, RelayConfig, ServerConfig};
use portfolio::relay::{MessageRelay, OutgoingMessage, RelayError};

/// What the stub relay should do with the next message.
#[derive(Clone, Copy)]
pub enum RelayOutcome {
    Deliver,
    Fail,
    NotConfigured,
}

/// A `MessageRelay` that records every call instead of talking to the network.
pub struct RecordingRelay {
    outcome: RelayOutcome,
    calls: AtomicUsize,
    last: Mutex<Option<OutgoingMessage>>,
}

impl RecordingRelay {
    pub fn new(outcome: RelayOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_message(&self) -> Option<OutgoingMessage> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageRelay for RecordingRelay {
    async fn send(&self, message: &OutgoingMessage) -> Result<(), RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(message.clone());
        match self.outcome {
            RelayOutcome::Deliver => Ok(()),
            RelayOutcome::Fail => Err(RelayError::Rejected {
                status: reqwest::StatusCode::BAD_GATEWAY,
            }),
            RelayOutcome::NotConfigured => Err(RelayError::NotConfigured),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3001,
        },
        relay: RelayConfig {
            to_email: "owner@example.com".to_string(),
            ..RelayConfig::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

/// Build the full router against a stub relay.
pub fn test_app(outcome: RelayOutcome) -> (axum::Router, Arc<RecordingRelay>) {
    let relay = RecordingRelay::new(outcome);
    let app = portfolio::create_app(test_config(), relay.clone());
    (app, relay)
}
