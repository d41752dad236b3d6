//! Tab-switch state machine, kept separate from rendering. The renderer
//! reconciles the DOM to whatever state these transitions produce.

use super::dataset::{self, TabEntry};
use super::TabId;

/// Page state. Holding the active tab as a single stored field makes
/// "exactly one tab is active" structural rather than something recovered
/// by scanning the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabsState {
    active: TabId,
}

/// Events the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabsEvent {
    Select(TabId),
}

impl TabsState {
    /// Initial state: the first dataset tab is active.
    pub fn new() -> Self {
        Self {
            active: TabId::first(),
        }
    }

    pub fn active(&self) -> TabId {
        self.active
    }

    /// Content payload for the active tab.
    pub fn content(&self) -> &'static TabEntry {
        dataset::entry(self.active)
    }

    /// Pure transition: `(state, event) -> state`. Selecting the already
    /// active tab yields an identical state.
    pub fn apply(self, event: TabsEvent) -> TabsState {
        match event {
            TabsEvent::Select(id) => TabsState { active: id },
        }
    }
}

impl Default for TabsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::about_tabs::dataset;

    #[test]
    fn initial_state_activates_the_first_tab() {
        let state = TabsState::new();
        assert_eq!(state.active(), TabId::History);
        assert_eq!(state.content(), dataset::entry(TabId::History));
    }

    #[test]
    fn select_switches_active_tab_and_content() {
        let state = TabsState::new().apply(TabsEvent::Select(TabId::Vision));
        let entry = dataset::entry(TabId::Vision);
        assert_eq!(state.active(), TabId::Vision);
        assert_eq!(state.content().text, entry.text);
        assert_eq!(state.content().image_url, entry.image_url);
    }

    #[test]
    fn every_tab_is_reachable_with_its_own_payload() {
        for id in TabId::all() {
            let state = TabsState::new().apply(TabsEvent::Select(id));
            assert_eq!(state.active(), id);
            assert_eq!(state.content().id, id);
        }
    }

    #[test]
    fn reselecting_the_active_tab_is_a_no_op() {
        let state = TabsState::new().apply(TabsEvent::Select(TabId::Goals));
        let again = state.apply(TabsEvent::Select(TabId::Goals));
        assert_eq!(state, again);
    }

    #[test]
    fn transition_sequence_ends_on_the_last_selection() {
        let state = TabsState::new()
            .apply(TabsEvent::Select(TabId::Vision))
            .apply(TabsEvent::Select(TabId::Goals))
            .apply(TabsEvent::Select(TabId::History));
        assert_eq!(state.active(), TabId::History);
        assert_eq!(state.content(), dataset::entry(TabId::History));
    }
}
