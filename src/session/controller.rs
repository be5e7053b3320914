use super::config::AssistantConfig;
use super::state::{
    InitOutcome, Role, SessionState, SessionStats, TranscriptMessage, TranscriptUpdate,
};
use crate::relay::{RelayConnection, RelayConnector, RelayEvent, RelayMessage, RelaySession};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

const UPDATE_BUFFER: usize = 64;

/// Owns at most one relay voice session and its transcript
///
/// Cloning is cheap; clones share the same session.
#[derive(Clone)]
pub struct VoiceSessionController {
    inner: Arc<Shared>,
}

struct Shared {
    /// Relay used to open sessions
    connector: Arc<dyn RelayConnector>,

    /// Session configuration sent on every start
    config: AssistantConfig,

    /// Session handle, guard state and background tasks
    lifecycle: Mutex<Lifecycle>,

    /// Transcript of the current (or last) session, in arrival order
    transcript: RwLock<Vec<TranscriptMessage>>,

    /// Transcript change notifications
    updates: broadcast::Sender<TranscriptUpdate>,
}

#[derive(Default)]
struct Lifecycle {
    state: SessionState,
    generation: u64,
    session: Option<Arc<dyn RelaySession>>,
    event_task: Option<JoinHandle<()>>,
    greeting_task: Option<JoinHandle<()>>,
    started_at: Option<DateTime<Utc>>,
    greetings_sent: usize,
    last_error: Option<String>,
}

/// What the event pump should do after handling an event
enum Flow {
    Continue,
    Stop,
}

impl VoiceSessionController {
    pub fn new(connector: Arc<dyn RelayConnector>, config: AssistantConfig) -> Self {
        let (updates, _) = broadcast::channel(UPDATE_BUFFER);

        Self {
            inner: Arc::new(Shared {
                connector,
                config,
                lifecycle: Mutex::new(Lifecycle::default()),
                transcript: RwLock::new(Vec::new()),
                updates,
            }),
        }
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.inner.config
    }

    /// Open a relay session unless one is already initializing or active.
    ///
    /// Failures are logged and reported in the outcome; the controller is
    /// left idle and ready for another attempt.
    pub async fn initialize(&self) -> InitOutcome {
        let generation = {
            let mut lifecycle = self.inner.lifecycle.lock().await;
            if lifecycle.state != SessionState::Idle {
                debug!("Assistant session already {}, ignoring initialize", lifecycle.state);
                return InitOutcome::AlreadyRunning;
            }

            lifecycle.state = SessionState::Initializing;
            lifecycle.generation += 1;
            lifecycle.last_error = None;
            lifecycle.generation
        };

        info!(
            "Initializing assistant session (generation {}) via {} relay",
            generation,
            self.inner.connector.name()
        );

        // Runs detached so a dropped caller cannot strand the guard or a started session
        let controller = self.clone();
        let open = tokio::spawn(async move { controller.open_session(generation).await });

        match open.await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Session open task failed: {}", e);
                self.abandon(generation, e.to_string()).await
            }
        }
    }

    async fn open_session(&self, generation: u64) -> InitOutcome {
        let RelayConnection { session, events } = match self.inner.connector.connect().await {
            Ok(connection) => connection,
            Err(e) => {
                error!("Failed to connect to relay: {}", e);
                return self.abandon(generation, e.to_string()).await;
            }
        };

        if let Err(e) = session.start(&self.inner.config).await {
            error!("Failed to start assistant session {}: {}", session.id(), e);
            if let Err(stop_err) = session.stop().await {
                warn!("Failed to stop session {} after start failure: {}", session.id(), stop_err);
            }
            return self.abandon(generation, e.to_string()).await;
        }

        let session_id = session.id().to_string();

        let mut lifecycle = self.inner.lifecycle.lock().await;
        if lifecycle.generation != generation {
            drop(lifecycle);
            warn!("Session {} was torn down while initializing, discarding", session_id);
            if let Err(e) = session.stop().await {
                warn!("Failed to stop discarded session {}: {}", session_id, e);
            }
            return InitOutcome::Cancelled;
        }

        lifecycle.state = SessionState::Active;
        lifecycle.session = Some(session);
        lifecycle.started_at = Some(Utc::now());
        lifecycle.event_task = Some(self.spawn_event_pump(generation, events));

        info!("Assistant session {} is active", session_id);

        InitOutcome::Started { session_id }
    }

    /// Run `initialize` in the background
    pub fn spawn_initialize(&self) -> JoinHandle<InitOutcome> {
        let controller = self.clone();
        tokio::spawn(async move { controller.initialize().await })
    }

    /// Initialize now and tear down when the returned guard is dropped
    pub fn mount(&self) -> MountGuard {
        MountGuard {
            controller: self.clone(),
            init_task: Some(self.spawn_initialize()),
        }
    }

    /// Release the session. Safe to call at any time, any number of times.
    ///
    /// Stop failures are logged and swallowed so cleanup always completes.
    pub async fn teardown(&self) {
        let session = self.detach(None, true).await.flatten();

        match session {
            Some(session) => {
                info!("Tearing down assistant session {}", session.id());
                if let Err(e) = session.stop().await {
                    warn!("Failed to stop assistant session {}: {}", session.id(), e);
                }
            }
            None => debug!("Teardown with no live assistant session"),
        }
    }

    /// Clear the transcript for a new session and schedule the greeting
    pub async fn on_session_start(&self) {
        let generation = self.inner.lifecycle.lock().await.generation;
        self.begin_session(generation).await;
    }

    /// Append a transcript message. Non-transcript messages are ignored.
    pub async fn on_transcript_message(&self, message: &RelayMessage) {
        if !message.is_transcript() {
            debug!("Ignoring relay message of type {}", message.kind);
            return;
        }

        let Some(payload) = &message.transcript else {
            warn!("Transcript message without transcript payload");
            return;
        };

        let entry = TranscriptMessage {
            role: Role::from_speaker(&payload.speaker),
            content: payload.text.clone(),
        };

        self.inner.transcript.write().await.push(entry.clone());
        let _ = self.inner.updates.send(TranscriptUpdate::Appended(entry));
    }

    /// Mark the session inactive. The transcript is kept for display.
    pub async fn on_session_end(&self) {
        if let Some(Some(session)) = self.detach(None, true).await {
            info!("Assistant call ended (session {})", session.id());
        }
    }

    /// Record a relay error. Does not tear the session down.
    pub async fn on_error(&self, err: &str) {
        error!("Relay error: {}", err);
        self.inner.lifecycle.lock().await.last_error = Some(err.to_string());
    }

    pub async fn state(&self) -> SessionState {
        self.inner.lifecycle.lock().await.state
    }

    pub async fn is_active(&self) -> bool {
        self.state().await == SessionState::Active
    }

    pub async fn is_initializing(&self) -> bool {
        self.state().await == SessionState::Initializing
    }

    /// Get accumulated transcript
    pub async fn transcript(&self) -> Vec<TranscriptMessage> {
        self.inner.transcript.read().await.clone()
    }

    /// Most recent transcript entry, as shown by the view
    pub async fn latest_message(&self) -> Option<TranscriptMessage> {
        self.inner.transcript.read().await.last().cloned()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TranscriptUpdate> {
        self.inner.updates.subscribe()
    }

    pub async fn stats(&self) -> SessionStats {
        let transcript_messages = self.inner.transcript.read().await.len();
        let lifecycle = self.inner.lifecycle.lock().await;

        SessionStats {
            state: lifecycle.state,
            session_id: lifecycle.session.as_ref().map(|s| s.id().to_string()),
            generation: lifecycle.generation,
            started_at: lifecycle.started_at,
            transcript_messages,
            greetings_sent: lifecycle.greetings_sent,
            last_error: lifecycle.last_error.clone(),
        }
    }

    /// Clear the guard after a failed initialization, unless a teardown or a
    /// newer attempt already owns the lifecycle.
    async fn abandon(&self, generation: u64, reason: String) -> InitOutcome {
        let mut lifecycle = self.inner.lifecycle.lock().await;
        if lifecycle.generation == generation {
            lifecycle.state = SessionState::Idle;
            lifecycle.session = None;
            lifecycle.last_error = Some(reason.clone());
        }

        InitOutcome::Failed { reason }
    }

    /// Detach the session and invalidate its generation.
    ///
    /// Returns `None` when `expected` no longer matches, otherwise the detached
    /// handle (if any). The pump is aborted only when the caller is not the
    /// pump itself.
    async fn detach(
        &self,
        expected: Option<u64>,
        abort_pump: bool,
    ) -> Option<Option<Arc<dyn RelaySession>>> {
        let (session, greeting, pump) = {
            let mut lifecycle = self.inner.lifecycle.lock().await;
            if expected.is_some_and(|generation| generation != lifecycle.generation) {
                return None;
            }

            lifecycle.generation += 1;
            lifecycle.state = SessionState::Idle;
            (
                lifecycle.session.take(),
                lifecycle.greeting_task.take(),
                lifecycle.event_task.take(),
            )
        };

        if let Some(greeting) = greeting {
            greeting.abort();
        }
        if abort_pump {
            if let Some(pump) = pump {
                pump.abort();
            }
        }

        Some(session)
    }

    fn spawn_event_pump(
        &self,
        generation: u64,
        mut events: mpsc::Receiver<RelayEvent>,
    ) -> JoinHandle<()> {
        let controller = self.clone();

        tokio::spawn(async move {
            debug!("Event pump started (generation {})", generation);

            while let Some(event) = events.recv().await {
                if let Flow::Stop = controller.dispatch(generation, event).await {
                    break;
                }
            }

            debug!("Event pump stopped (generation {})", generation);
        })
    }

    async fn dispatch(&self, generation: u64, event: RelayEvent) -> Flow {
        if self.inner.lifecycle.lock().await.generation != generation {
            debug!("Dropping relay event from stale session");
            return Flow::Stop;
        }

        match event {
            RelayEvent::SessionStarted => {
                self.begin_session(generation).await;
                Flow::Continue
            }
            RelayEvent::Message { message } => {
                self.on_transcript_message(&message).await;
                Flow::Continue
            }
            RelayEvent::SessionEnded => {
                if let Some(Some(session)) = self.detach(Some(generation), false).await {
                    info!("Assistant call ended (session {})", session.id());
                }
                Flow::Stop
            }
            RelayEvent::Error { error } => {
                self.on_error(&error).await;
                if !self.inner.config.teardown_on_error {
                    return Flow::Continue;
                }

                if let Some(Some(session)) = self.detach(Some(generation), false).await {
                    warn!("Tearing down session {} after relay error", session.id());
                    if let Err(e) = session.stop().await {
                        warn!("Failed to stop session {}: {}", session.id(), e);
                    }
                }
                Flow::Stop
            }
        }
    }

    async fn begin_session(&self, generation: u64) {
        self.inner.transcript.write().await.clear();
        let _ = self.inner.updates.send(TranscriptUpdate::Reset);

        info!("Assistant call started, transcript reset");

        let delay = self.inner.config.greeting_delay();
        let controller = self.clone();
        let greeting = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            controller.send_greeting(generation).await;
        });

        let mut lifecycle = self.inner.lifecycle.lock().await;
        if lifecycle.generation != generation {
            greeting.abort();
            return;
        }
        if let Some(previous) = lifecycle.greeting_task.replace(greeting) {
            previous.abort();
        }
    }

    /// Speak the greeting if the session that scheduled it is still live
    async fn send_greeting(&self, generation: u64) {
        let session = {
            let mut lifecycle = self.inner.lifecycle.lock().await;
            if lifecycle.generation != generation {
                debug!("Session changed before greeting, skipping");
                return;
            }

            match lifecycle.session.clone() {
                Some(session) => {
                    lifecycle.greeting_task = None;
                    session
                }
                None => {
                    debug!("No live session for greeting, skipping");
                    return;
                }
            }
        };

        match session.say(&self.inner.config.greeting).await {
            Ok(()) => {
                info!("Sent greeting on session {}", session.id());
                self.inner.lifecycle.lock().await.greetings_sent += 1;
            }
            Err(e) => warn!("Failed to send greeting on session {}: {}", session.id(), e),
        }
    }
}

/// Ties a session to a scope: dropping the guard tears the session down
pub struct MountGuard {
    controller: VoiceSessionController,
    init_task: Option<JoinHandle<InitOutcome>>,
}

impl MountGuard {
    pub fn controller(&self) -> &VoiceSessionController {
        &self.controller
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        let init_task = self.init_task.take();
        let controller = self.controller.clone();

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    controller.teardown().await;
                    // An initialize that had not begun yet may still open a session
                    if let Some(init_task) = init_task {
                        if let Ok(InitOutcome::Started { .. }) = init_task.await {
                            controller.teardown().await;
                        }
                    }
                });
            }
            Err(_) => warn!("No async runtime on unmount, assistant session not torn down"),
        }
    }
}
