use contracts::about_tabs::TabId;
use leptos::ev;
use leptos::prelude::*;

/// Clickable tab control. Carries the `tab--active` marking while its tab
/// is selected.
#[component]
pub fn TabButton(
    /// Tab this button selects
    id: TabId,
    /// Accessible label, set verbatim
    #[prop(into)]
    aria_label: String,
    /// Whether this button holds the active marking (reactive)
    #[prop(into)]
    is_active: Signal<bool>,
    /// Selection handler, invoked with the triggering event and the tab id
    on_select: Callback<(ev::MouseEvent, TabId)>,
    /// Button caption; an absent caption renders an empty button
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            id=id.as_str()
            aria-label=aria_label
            class="tab"
            class=("tab--active", move || is_active.get())
            on:click=move |ev| on_select.run((ev, id))
        >
            {children.map(|children| children())}
        </button>
    }
}
