//! State machine trait for status enums.

use std::fmt;

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors list their outgoing edges once in [`valid_transitions`];
/// validated transitions and terminal checks come for free.
///
/// [`valid_transitions`]: StateMachine::valid_transitions
pub trait StateMachine: Sized + Copy + PartialEq + fmt::Display + 'static {
    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> &'static [Self];

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(self, target))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
