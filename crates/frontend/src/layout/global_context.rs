use contracts::about_tabs::state::{TabsEvent, TabsState};
use contracts::about_tabs::TabId;
use leptos::prelude::*;

/// Page-level state store, provided via context at the app root. Holds the
/// tab-switch state; all mutation goes through [`Self::activate_tab`].
#[derive(Clone, Copy)]
pub struct AboutTabsContext {
    pub state: RwSignal<TabsState>,
}

impl AboutTabsContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(TabsState::new()),
        }
    }

    /// Reactive handle on the active tab id.
    pub fn active(&self) -> Signal<TabId> {
        let state = self.state;
        Signal::derive(move || state.get().active())
    }

    pub fn activate_tab(&self, id: TabId) {
        log::debug!("activate_tab: '{}'", id);
        self.state.update(|s| *s = s.apply(TabsEvent::Select(id)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_tab_moves_the_stored_pointer() {
        let ctx = AboutTabsContext::new();
        assert_eq!(ctx.state.get_untracked().active(), TabId::first());

        ctx.activate_tab(TabId::Goals);
        assert_eq!(ctx.state.get_untracked().active(), TabId::Goals);

        ctx.activate_tab(TabId::Goals);
        assert_eq!(ctx.state.get_untracked().active(), TabId::Goals);
    }
}
