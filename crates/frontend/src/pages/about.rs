use crate::layout::global_context::AboutTabsContext;
use crate::shared::components::{PageHeader, TabButton, TabImage};
use contracts::about_tabs::TabId;
use leptos::ev;
use leptos::prelude::*;

const PAGE_INTRO: &str = "Lorem ipsum dolor sit, amet consectetur adipisicing elit. \
     Earum, voluptate. Ipsam nisi nihil cum iusto?";

/// "About Us" page: heading, tab list, and the active tab's description
/// and illustration. Rendering tracks the state store; the image view is
/// rebuilt per transition so exactly one image element exists at a time.
#[component]
pub fn AboutPage() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AboutTabsContext>()
        .expect("AboutTabsContext context not found");

    let on_select = Callback::new(move |(_, id): (ev::MouseEvent, TabId)| {
        tabs_store.activate_tab(id);
    });

    let active = tabs_store.active();
    let content = Memo::new(move |_| tabs_store.state.get().content());

    let buttons = TabId::all()
        .into_iter()
        .map(|id| {
            let is_active = Memo::new(move |_| active.get() == id);
            view! {
                <TabButton
                    id=id
                    aria_label=id.aria_label()
                    is_active=is_active
                    on_select=on_select
                >
                    {id.label()}
                </TabButton>
            }
        })
        .collect_view();

    view! {
        <main class="tabs-page">
            <section class="page-wrapper">
                <PageHeader title="About us" description=PAGE_INTRO.to_string() />

                <article class="tabs">
                    <div class="tabs-wrapper">
                        <div class="tabs__list">{buttons}</div>

                        <p id="tab-text" class="tabs__description">
                            {move || content.get().text}
                        </p>
                    </div>
                    {move || {
                        let entry = content.get();
                        view! {
                            <TabImage id="tab-image" src=entry.image_url title=entry.text />
                        }
                    }}
                </article>
            </section>
        </main>
    }
}
