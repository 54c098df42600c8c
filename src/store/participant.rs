//! Current participant's identifiers.

use serde::{Deserialize, Serialize};

/// Identity of the participant using this application instance.
///
/// An empty string means "unset" for either field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub participant_id: String,
    pub quiz_id: String,
}

impl Participant {
    pub fn new(participant_id: impl Into<String>, quiz_id: impl Into<String>) -> Self {
        Self {
            participant_id: participant_id.into(),
            quiz_id: quiz_id.into(),
        }
    }
}

/// Store for the current participant.
#[derive(Debug, Clone, Default)]
pub struct ParticipantStore {
    participant: Participant,
}

impl ParticipantStore {
    /// Create a store with both identifiers unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite both identifiers with the given participant's.
    pub fn set_participant(&mut self, participant: &Participant) {
        self.participant.participant_id = participant.participant_id.clone();
        self.participant.quiz_id = participant.quiz_id.clone();
        tracing::debug!(
            participant_id = %self.participant.participant_id,
            quiz_id = %self.participant.quiz_id,
            "Participant set"
        );
    }

    /// Current identifiers.
    pub fn participant_info(&self) -> &Participant {
        &self.participant
    }

    /// True once a non-empty participant id has been set.
    pub fn participant_exists(&self) -> bool {
        !self.participant.participant_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let store = ParticipantStore::new();
        assert_eq!(store.participant_info(), &Participant::new("", ""));
        assert!(!store.participant_exists());
    }

    #[test]
    fn test_set_participant() {
        let mut store = ParticipantStore::new();
        store.set_participant(&Participant::new("abc", "xyz"));

        assert_eq!(store.participant_info().participant_id, "abc");
        assert_eq!(store.participant_info().quiz_id, "xyz");
        assert!(store.participant_exists());
    }

    #[test]
    fn test_second_set_replaces_first() {
        let mut store = ParticipantStore::new();
        store.set_participant(&Participant::new("abc", "xyz"));
        store.set_participant(&Participant::new("def", ""));

        // No merging: the empty quiz id wins
        assert_eq!(store.participant_info(), &Participant::new("def", ""));
    }

    #[test]
    fn test_set_is_idempotent() {
        let p = Participant::new("abc", "xyz");

        let mut once = ParticipantStore::new();
        once.set_participant(&p);

        let mut twice = ParticipantStore::new();
        twice.set_participant(&p);
        twice.set_participant(&p);

        assert_eq!(once.participant_info(), twice.participant_info());
        assert_eq!(once.participant_exists(), twice.participant_exists());
    }

    #[test]
    fn test_exists_depends_only_on_participant_id() {
        let mut store = ParticipantStore::new();
        store.set_participant(&Participant::new("", "quiz-01"));
        assert!(!store.participant_exists());
    }

    #[test]
    fn test_wire_shape() {
        let p = Participant::new("abc", "xyz");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json, serde_json::json!({"participant_id": "abc", "quiz_id": "xyz"}));
    }
}
