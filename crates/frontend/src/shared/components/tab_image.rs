use leptos::prelude::*;

/// Illustration for the active tab. Pure view, no behavior; the title
/// doubles as the alt text.
#[component]
pub fn TabImage(
    #[prop(into)] id: String,
    /// Image source URL
    #[prop(into)]
    src: String,
    /// Descriptive title, set as the alt text
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! { <img id=id class="tab-image" src=src alt=title /> }
}
