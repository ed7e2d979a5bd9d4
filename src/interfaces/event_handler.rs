// ============================================================================
// Event Handler Interface
// Defines the contract for observing conversion events
// ============================================================================

use crate::numeric::{ParseError, Radix};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Correlates the events of a single conversion request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionId(Uuid);

impl ConversionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ConversionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the converter
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionEvent {
    /// Input received
    ConversionRequested {
        id: ConversionId,
        source: Radix,
        input_len: usize,
        timestamp: DateTime<Utc>,
    },

    /// Input rejected by the parser; nothing was rendered
    ParseFailed {
        id: ConversionId,
        error: ParseError,
        timestamp: DateTime<Utc>,
    },

    /// All target radices rendered
    ConversionCompleted {
        id: ConversionId,
        targets: Vec<Radix>,
        truncated: bool,
        timestamp: DateTime<Utc>,
    },
}

impl ConversionEvent {
    pub fn id(&self) -> ConversionId {
        match self {
            ConversionEvent::ConversionRequested { id, .. }
            | ConversionEvent::ParseFailed { id, .. }
            | ConversionEvent::ConversionCompleted { id, .. } => *id,
        }
    }
}

/// Event handler trait for processing converter events
/// Implementations can handle logging, auditing, UI notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ConversionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ConversionEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        match &event {
            ConversionEvent::ParseFailed { id, error, .. } => {
                tracing::warn!(conversion = %id.as_uuid(), %error, "Conversion rejected");
            },
            _ => tracing::debug!("Converter event: {:?}", event),
        }
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<ConversionEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events recorded so far
    pub fn events(&self) -> Vec<ConversionEvent> {
        self.events.lock().clone()
    }

    /// Remove and return the recorded events
    pub fn drain(&self) -> Vec<ConversionEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<ConversionEvent>) {
        self.events.lock().extend(events);
    }
}
