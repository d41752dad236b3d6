use leptos::prelude::*;

/// Page heading with an optional intro paragraph.
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional intro text under the title
    #[prop(optional, into)]
    description: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <article class="header-wrapper">
            <h1 class="header__title">{title}</h1>
            {move || {
                description
                    .get()
                    .map(|text| view! { <p class="header__description">{text}</p> })
            }}
        </article>
    }
}
