//! Connection to the external speech/LLM relay
//!
//! The relay protocol is opaque to the controller: it only sees the
//! `RelayConnector` / `RelaySession` traits and an ordered `RelayEvent` stream.

pub mod client;
pub mod connector;
pub mod error;
pub mod messages;

pub use client::{NatsRelay, NatsRelaySession, SessionSubjects};
pub use connector::{RelayConnection, RelayConnector, RelaySession};
pub use error::RelayError;
pub use messages::{RelayEvent, RelayMessage, TranscriptPayload};
