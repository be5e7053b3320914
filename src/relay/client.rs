use async_nats::Client;
use futures::stream::StreamExt;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::connector::{RelayConnection, RelayConnector, RelaySession};
use super::error::RelayError;
use super::messages::{RelayEvent, SayRequest, StartSessionRequest, StopRequest};
use crate::config::RelayConfig;
use crate::session::AssistantConfig;

/// Buffered relay events per session before the relay is back-pressured
const EVENT_BUFFER: usize = 100;

/// Relay reachable over NATS
pub struct NatsRelay {
    url: String,
    subject_prefix: String,
}

impl NatsRelay {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            url: config.url.clone(),
            subject_prefix: config.subject_prefix.clone(),
        }
    }
}

#[async_trait::async_trait]
impl RelayConnector for NatsRelay {
    async fn connect(&self) -> Result<RelayConnection, RelayError> {
        info!("Connecting to relay at {}", self.url);

        let client = async_nats::connect(self.url.as_str())
            .await
            .map_err(|e| RelayError::Connect {
                url: self.url.clone(),
                reason: e.to_string(),
            })?;

        let session_id = format!("assistant-{}", uuid::Uuid::new_v4());
        let subjects = SessionSubjects::new(&self.subject_prefix, &session_id);

        let mut subscriber = client
            .subscribe(subjects.events.clone())
            .await
            .map_err(|e| RelayError::Subscribe {
                subject: subjects.events.clone(),
                reason: e.to_string(),
            })?;

        info!("Subscribed to {}", subjects.events);

        let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER);
        let forward_id = session_id.clone();

        // Forward relay events in arrival order
        let forwarder = tokio::spawn(async move {
            while let Some(msg) = subscriber.next().await {
                match serde_json::from_slice::<RelayEvent>(&msg.payload) {
                    Ok(event) => {
                        if event_tx.send(event).await.is_err() {
                            debug!("Event receiver for {} dropped", forward_id);
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to parse relay event for {}: {}", forward_id, e);
                    }
                }
            }

            debug!("Relay event forwarder for {} stopped", forward_id);
        });

        let session = NatsRelaySession {
            client,
            session_id,
            subjects,
            forwarder: Mutex::new(Some(forwarder)),
        };

        Ok(RelayConnection {
            session: Arc::new(session),
            events: event_rx,
        })
    }

    fn name(&self) -> &str {
        "nats"
    }
}

/// NATS subjects used by one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSubjects {
    pub start: String,
    pub say: String,
    pub stop: String,
    pub events: String,
}

impl SessionSubjects {
    pub fn new(prefix: &str, session_id: &str) -> Self {
        let base = format!("{}.{}", prefix, session_id);
        Self {
            start: format!("{}.start", base),
            say: format!("{}.say", base),
            stop: format!("{}.stop", base),
            events: format!("{}.events", base),
        }
    }
}

pub struct NatsRelaySession {
    client: Client,
    session_id: String,
    subjects: SessionSubjects,
    forwarder: Mutex<Option<JoinHandle<()>>>,
}

impl NatsRelaySession {
    async fn publish<T: Serialize>(&self, subject: &str, message: &T) -> Result<(), RelayError> {
        let payload = serde_json::to_vec(message)?;

        self.client
            .publish(subject.to_string(), payload.into())
            .await
            .map_err(|e| RelayError::Publish {
                subject: subject.to_string(),
                reason: e.to_string(),
            })?;

        self.client
            .flush()
            .await
            .map_err(|e| RelayError::Publish {
                subject: subject.to_string(),
                reason: e.to_string(),
            })
    }

    fn stop_forwarder(&self) {
        let handle = match self.forwarder.lock() {
            Ok(mut forwarder) => forwarder.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        if let Some(handle) = handle {
            handle.abort();
        }
    }
}

#[async_trait::async_trait]
impl RelaySession for NatsRelaySession {
    fn id(&self) -> &str {
        &self.session_id
    }

    async fn start(&self, config: &AssistantConfig) -> Result<(), RelayError> {
        let request = StartSessionRequest::new(&self.session_id, config);
        self.publish(&self.subjects.start, &request).await?;

        info!("Requested session start on {} ({})", self.subjects.start, config.name);

        Ok(())
    }

    async fn say(&self, text: &str) -> Result<(), RelayError> {
        let request = SayRequest {
            session_id: self.session_id.clone(),
            text: text.to_string(),
        };

        self.publish(&self.subjects.say, &request).await
    }

    async fn stop(&self) -> Result<(), RelayError> {
        info!("Stopping relay session {}", self.session_id);

        self.stop_forwarder();

        let request = StopRequest {
            session_id: self.session_id.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        self.publish(&self.subjects.stop, &request).await
    }
}

impl Drop for NatsRelaySession {
    fn drop(&mut self) {
        self.stop_forwarder();
    }
}
