#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use swarmfund_assistant::relay::{RelayConnection, RelayConnector, RelaySession};
use swarmfund_assistant::{AssistantConfig, RelayError, RelayEvent, VoiceSessionController};
use tokio::sync::mpsc;

/// Relay double that records calls and lets tests script events
#[derive(Default)]
pub struct MockRelay {
    pub connects: AtomicUsize,
    pub fail_connect: AtomicBool,
    pub fail_start: AtomicBool,
    pub fail_stop: AtomicBool,
    pub connect_delay: Mutex<Duration>,
    pub start_delay: Mutex<Duration>,
    sessions: Mutex<Vec<Arc<MockSession>>>,
    senders: Mutex<Vec<mpsc::Sender<RelayEvent>>>,
}

impl MockRelay {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_connect_delay(delay: Duration) -> Arc<Self> {
        let relay = Self::default();
        *relay.connect_delay.lock().unwrap() = delay;
        Arc::new(relay)
    }

    pub fn with_start_delay(delay: Duration) -> Arc<Self> {
        let relay = Self::default();
        *relay.start_delay.lock().unwrap() = delay;
        Arc::new(relay)
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn session(&self, index: usize) -> Arc<MockSession> {
        Arc::clone(&self.sessions.lock().unwrap()[index])
    }

    pub fn last_session(&self) -> Arc<MockSession> {
        Arc::clone(self.sessions.lock().unwrap().last().expect("no session opened"))
    }

    /// Emit an event on the most recent connection. Send errors are ignored
    /// because the controller may already have dropped the receiver.
    pub async fn emit(&self, event: RelayEvent) {
        let sender = self.senders.lock().unwrap().last().cloned();
        if let Some(sender) = sender {
            let _ = sender.send(event).await;
        }
    }

    /// Emit on a specific (possibly stale) connection
    pub async fn emit_on(&self, index: usize, event: RelayEvent) {
        let sender = self.senders.lock().unwrap().get(index).cloned();
        if let Some(sender) = sender {
            let _ = sender.send(event).await;
        }
    }
}

#[async_trait::async_trait]
impl RelayConnector for MockRelay {
    async fn connect(&self) -> Result<RelayConnection, RelayError> {
        let index = self.connects.fetch_add(1, Ordering::SeqCst);

        let delay = *self.connect_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if self.fail_connect.load(Ordering::SeqCst) {
            return Err(RelayError::Connect {
                url: "mock://relay".to_string(),
                reason: "connection refused".to_string(),
            });
        }

        let session = Arc::new(MockSession {
            id: format!("mock-{}", index),
            fail_start: self.fail_start.load(Ordering::SeqCst),
            fail_stop: self.fail_stop.load(Ordering::SeqCst),
            start_delay: *self.start_delay.lock().unwrap(),
            ..MockSession::default()
        });
        let (tx, rx) = mpsc::channel(32);

        self.sessions.lock().unwrap().push(Arc::clone(&session));
        self.senders.lock().unwrap().push(tx);

        Ok(RelayConnection {
            session,
            events: rx,
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[derive(Default)]
pub struct MockSession {
    pub id: String,
    pub fail_start: bool,
    pub fail_stop: bool,
    pub start_delay: Duration,
    pub starts: AtomicUsize,
    pub stops: AtomicUsize,
    pub said: Mutex<Vec<String>>,
}

impl MockSession {
    pub fn said(&self) -> Vec<String> {
        self.said.lock().unwrap().clone()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl RelaySession for MockSession {
    fn id(&self) -> &str {
        &self.id
    }

    async fn start(&self, _config: &AssistantConfig) -> Result<(), RelayError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        if !self.start_delay.is_zero() {
            tokio::time::sleep(self.start_delay).await;
        }
        if self.fail_start {
            return Err(RelayError::Closed(self.id.clone()));
        }
        Ok(())
    }

    async fn say(&self, text: &str) -> Result<(), RelayError> {
        self.said.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn stop(&self) -> Result<(), RelayError> {
        self.stops.fetch_add(1, Ordering::SeqCst);
        if self.fail_stop {
            return Err(RelayError::Closed(self.id.clone()));
        }
        Ok(())
    }
}

pub fn controller(relay: &Arc<MockRelay>) -> VoiceSessionController {
    VoiceSessionController::new(relay.clone(), AssistantConfig::default())
}

pub fn controller_with(relay: &Arc<MockRelay>, config: AssistantConfig) -> VoiceSessionController {
    VoiceSessionController::new(relay.clone(), config)
}

/// Let spawned tasks drain pending work (time is paused in these tests)
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}
