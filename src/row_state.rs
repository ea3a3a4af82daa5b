//! Per-Row Fetch State
//!
//! `Idle -> Loading -> Populated`, or `Loading -> Stalled` on failure.
//! There is no way back: a row fetches its details at most once.

use crate::error::FetchError;
use crate::models::LinkRecord;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RowState {
    #[default]
    Idle,
    Loading,
    Populated(Vec<LinkRecord>),
    /// Failed fetch; holds the status that was reported
    Stalled(String),
}

impl RowState {
    pub fn trigger_enabled(&self) -> bool {
        matches!(self, RowState::Idle)
    }

    pub fn detail_visible(&self) -> bool {
        !matches!(self, RowState::Idle)
    }

    pub fn detail_populated(&self) -> bool {
        matches!(self, RowState::Populated(_))
    }

    /// Move `Idle` to `Loading`. Returns false (and changes nothing) for a
    /// row that was already triggered.
    pub fn activate(&mut self) -> bool {
        if !self.trigger_enabled() {
            return false;
        }
        *self = RowState::Loading;
        true
    }

    /// Record the outcome of the detail fetch. Only a loading row settles.
    pub fn settle(&mut self, result: Result<Vec<LinkRecord>, FetchError>) {
        if !matches!(self, RowState::Loading) {
            return;
        }
        *self = match result {
            Ok(records) => RowState::Populated(records),
            Err(err) => RowState::Stalled(err.status().to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(state: &RowState) -> (bool, bool, bool) {
        (state.trigger_enabled(), state.detail_visible(), state.detail_populated())
    }

    #[test]
    fn test_fresh_row_is_idle() {
        assert_eq!(flags(&RowState::default()), (true, false, false));
    }

    #[test]
    fn test_activation_disables_trigger_immediately() {
        let mut state = RowState::default();
        assert!(state.activate());
        assert_eq!(flags(&state), (false, true, false));
        assert!(!state.activate());
        assert_eq!(state, RowState::Loading);
    }

    #[test]
    fn test_success_populates() {
        let mut state = RowState::default();
        state.activate();
        state.settle(Ok(Vec::new()));
        assert_eq!(flags(&state), (false, true, true));
        assert!(!state.activate());
    }

    #[test]
    fn test_failure_is_terminal() {
        let mut state = RowState::default();
        state.activate();
        state.settle(Err(FetchError::transport("error")));
        assert_eq!(state, RowState::Stalled("error".to_string()));
        assert!(!state.activate());
        state.settle(Ok(Vec::new()));
        assert_eq!(flags(&state), (false, true, false));
    }

    #[test]
    fn test_idle_row_ignores_results() {
        let mut state = RowState::default();
        state.settle(Ok(Vec::new()));
        assert_eq!(state, RowState::Idle);
    }
}
