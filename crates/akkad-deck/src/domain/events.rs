//! Domain events for the deck context.

use std::fmt;
use std::str::FromStr;

use akkad_core::error::DomainError;
use akkad_core::event::DomainEvent;
use serde::{Deserialize, Serialize};

/// Scope a card can be locked for. Scopes nest: an act contains sessions,
/// a session contains scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockScope {
    Scene,
    Session,
    Act,
}

impl LockScope {
    /// Every scope, innermost first.
    pub const ALL: [LockScope; 3] = [LockScope::Scene, LockScope::Session, LockScope::Act];

    /// This scope and every scope nested within it; what a refresh clears.
    #[must_use]
    pub fn nested(self) -> &'static [LockScope] {
        match self {
            LockScope::Scene => &Self::ALL[..1],
            LockScope::Session => &Self::ALL[..2],
            LockScope::Act => &Self::ALL,
        }
    }

    /// Lowercase name, as used in event payloads and routes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LockScope::Scene => "scene",
            LockScope::Session => "session",
            LockScope::Act => "act",
        }
    }
}

impl fmt::Display for LockScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LockScope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scene" => Ok(LockScope::Scene),
            "session" => Ok(LockScope::Session),
            "act" => Ok(LockScope::Act),
            other => Err(DomainError::Validation(format!(
                "unknown lock scope: {other}"
            ))),
        }
    }
}

/// Progress of a shuffle, sent to shuffle listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ShuffleEvent {
    /// A shuffle has begun.
    Start,
    /// The shuffle completed and was persisted.
    Done,
    /// The shuffle was abandoned; the deck is unchanged.
    Failed {
        /// Why the shuffle failed.
        error: String,
    },
}

impl ShuffleEvent {
    /// A `Failed` event describing `error`.
    #[must_use]
    pub fn failed(error: &DomainError) -> Self {
        ShuffleEvent::Failed {
            error: error.to_string(),
        }
    }
}

impl DomainEvent for ShuffleEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ShuffleEvent::Start => "deck.shuffle_started",
            ShuffleEvent::Done => "deck.shuffle_done",
            ShuffleEvent::Failed { .. } => "deck.shuffle_failed",
        }
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(self).expect("ShuffleEvent serialization is infallible")
    }
}

/// Outcome of a lock or refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockEventKind {
    Updated,
    Failed,
}

/// Sent to lock listeners whenever a locked set changes, or a lock could
/// not find an eligible card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEvent {
    /// What happened.
    pub event: LockEventKind,
    /// The scope that was locked or refreshed.
    pub name: LockScope,
}

impl LockEvent {
    /// The locked sets for `name` changed.
    #[must_use]
    pub fn updated(name: LockScope) -> Self {
        Self {
            event: LockEventKind::Updated,
            name,
        }
    }

    /// Locking for `name` found no eligible card.
    #[must_use]
    pub fn failed(name: LockScope) -> Self {
        Self {
            event: LockEventKind::Failed,
            name,
        }
    }
}

impl DomainEvent for LockEvent {
    fn event_type(&self) -> &'static str {
        match self.event {
            LockEventKind::Updated => "deck.lock_updated",
            LockEventKind::Failed => "deck.lock_failed",
        }
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(self).expect("LockEvent serialization is infallible")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shuffle_payloads() {
        assert_eq!(ShuffleEvent::Start.to_payload(), json!({ "event": "start" }));
        assert_eq!(ShuffleEvent::Done.to_payload(), json!({ "event": "done" }));
        assert_eq!(
            ShuffleEvent::failed(&DomainError::ExhaustedPool).to_payload(),
            json!({
                "event": "failed",
                "error": "cannot reshuffle, there are no cards left"
            })
        );
    }

    #[test]
    fn test_lock_payloads() {
        assert_eq!(
            LockEvent::updated(LockScope::Session).to_payload(),
            json!({ "event": "updated", "name": "session" })
        );
        assert_eq!(
            LockEvent::failed(LockScope::Scene).to_payload(),
            json!({ "event": "failed", "name": "scene" })
        );
    }

    #[test]
    fn test_event_types() {
        assert_eq!(ShuffleEvent::Start.event_type(), "deck.shuffle_started");
        assert_eq!(
            LockEvent::failed(LockScope::Act).event_type(),
            "deck.lock_failed"
        );
    }

    #[test]
    fn test_nested_scopes() {
        assert_eq!(LockScope::Scene.nested(), &[LockScope::Scene]);
        assert_eq!(
            LockScope::Session.nested(),
            &[LockScope::Scene, LockScope::Session]
        );
        assert_eq!(
            LockScope::Act.nested(),
            &[LockScope::Scene, LockScope::Session, LockScope::Act]
        );
    }

    #[test]
    fn test_scope_from_str() {
        for scope in LockScope::ALL {
            assert_eq!(scope.as_str().parse::<LockScope>().unwrap(), scope);
        }
        assert!(matches!(
            "chapter".parse::<LockScope>(),
            Err(DomainError::Validation(_))
        ));
    }
}
