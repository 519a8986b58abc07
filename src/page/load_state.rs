//! Page-load visual state.
//!
//! The body class list used to be mutated ad hoc. Here the state is an
//! explicit enum driven by [`transition`], and [`LoadState::apply`] is the
//! only place that writes the markers onto a [`ClassList`].

use super::{ClassList, BODY_LOADED, BODY_LOADING};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSignal {
    /// Bootstrap started.
    Start,
    /// Readiness reached `Complete`.
    Ready,
    /// Loader delay elapsed.
    Cleanup,
}

/// Compute the next load state. `None` means no marker is present.
pub fn transition(current: Option<LoadState>, signal: LoadSignal) -> Option<LoadState> {
    match (current, signal) {
        (None, LoadSignal::Start) => Some(LoadState::Loading),
        (state, LoadSignal::Start) => state,
        (_, LoadSignal::Ready) => Some(LoadState::Loaded),
        (_, LoadSignal::Cleanup) => None,
    }
}

impl LoadState {
    /// Markers carried by the body in this state. Both remain present
    /// once loaded, until cleanup.
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            LoadState::Loading => &[BODY_LOADING],
            LoadState::Loaded => &[BODY_LOADING, BODY_LOADED],
        }
    }

    /// Write `state` onto `classes`, leaving unrelated classes alone.
    pub fn apply(state: Option<LoadState>, classes: &mut ClassList) {
        classes.remove(BODY_LOADING);
        classes.remove(BODY_LOADED);
        if let Some(state) = state {
            for marker in state.markers() {
                classes.add(marker);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_sequence() {
        let s = transition(None, LoadSignal::Start);
        assert_eq!(s, Some(LoadState::Loading));
        let s = transition(s, LoadSignal::Ready);
        assert_eq!(s, Some(LoadState::Loaded));
        let s = transition(s, LoadSignal::Cleanup);
        assert_eq!(s, None);
    }

    #[test]
    fn test_start_does_not_rewind() {
        assert_eq!(
            transition(Some(LoadState::Loaded), LoadSignal::Start),
            Some(LoadState::Loaded)
        );
    }

    #[test]
    fn test_apply_keeps_other_classes() {
        let mut classes = ClassList::default();
        classes.add("theme-dark");

        LoadState::apply(Some(LoadState::Loaded), &mut classes);
        assert!(classes.contains(BODY_LOADING));
        assert!(classes.contains(BODY_LOADED));

        LoadState::apply(None, &mut classes);
        assert!(!classes.contains(BODY_LOADING));
        assert!(!classes.contains(BODY_LOADED));
        assert!(classes.contains("theme-dark"));
    }
}
