use leptos::*;

use crate::api::{ApiClient, MAX_SEQUENCE_LEN};

#[component]
pub fn RandomSequencePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let (count, set_count) = create_signal(MAX_SEQUENCE_LEN);
    let input_ref = create_node_ref::<html::Input>();

    // Local resource: reqwest futures are not Send on wasm.
    let sequence = create_local_resource(move || count.get(), move |len| {
        let api = api.clone();
        async move { api.random_sequence(len).await }
    });

    let on_generate = move |_| {
        let requested = input_ref
            .get()
            .and_then(|input| input.value().parse::<u32>().ok())
            .unwrap_or(MAX_SEQUENCE_LEN)
            .clamp(1, MAX_SEQUENCE_LEN);
        if requested == count.get_untracked() {
            sequence.refetch();
        } else {
            set_count.set(requested);
        }
    };

    view! {
        <section class="card">
            <h2>"Random sequence"</h2>
            <div class="controls">
                <label for="count">"Length (1-10): "</label>
                <input
                    id="count"
                    type="number"
                    min="1"
                    max=MAX_SEQUENCE_LEN.to_string()
                    value=move || count.get().to_string()
                    node_ref=input_ref
                />
                <button on:click=on_generate>"Generate"</button>
            </div>
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    sequence.get().map(|result| match result {
                        Ok(seq) => view! {
                            <ol class="sequence">
                                {seq.ordered()
                                    .into_iter()
                                    .map(|(_, value)| view! { <li>{value}</li> })
                                    .collect_view()}
                            </ol>
                        }
                        .into_view(),
                        Err(err) => {
                            tracing::warn!("sequence fetch failed: {}", err);
                            view! { <p class="error">"Could not load the sequence: " {err}</p> }
                                .into_view()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}
