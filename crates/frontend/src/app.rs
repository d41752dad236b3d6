use crate::layout::global_context::AboutTabsContext;
use crate::pages::about::AboutPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the tab state store to the whole page via context.
    provide_context(AboutTabsContext::new());

    view! {
        <AboutPage />
    }
}
