use leptos::*;

use crate::api::ApiClient;
use crate::models::Section;

#[component]
pub fn MemoPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    // Fetched once, the first time this route renders.
    let sections = create_local_resource(|| (), move |_| {
        let api = api.clone();
        async move { api.sections().await }
    });

    view! {
        <section class="card">
            <h2>"Memo"</h2>
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    sections.get().map(|result| match result {
                        Ok(sections) if sections.is_empty() => {
                            view! { <p>"No sections yet."</p> }.into_view()
                        }
                        Ok(sections) => sections
                            .into_iter()
                            .map(|section| view! { <SectionBlock section/> })
                            .collect_view(),
                        Err(err) => {
                            tracing::warn!("sections fetch failed: {}", err);
                            view! { <p class="error">"Could not load sections: " {err}</p> }
                                .into_view()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn SectionBlock(section: Section) -> impl IntoView {
    view! {
        <div class="memo-section">
            <h3>{section.name}</h3>
            <ul>
                {section
                    .notes
                    .into_iter()
                    .map(|note| {
                        let description = (!note.description.is_empty())
                            .then(|| view! { <p class="note-description">{note.description}</p> });
                        view! {
                            <li>
                                <a href=note.url target="_blank" rel="noopener">{note.name}</a>
                                {description}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
