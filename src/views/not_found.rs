use leptos::*;
use leptos_router::A;

/// Fallback page for the catch-all route. Unmatched paths land here by
/// design rather than surfacing an error.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let path = window()
        .location()
        .pathname()
        .unwrap_or_else(|_| String::from("this address"));

    view! {
        <section class="card">
            <h2>"Page not found"</h2>
            <p>"Nothing lives at " <code>{path}</code></p>
            <p><A href="/">"Back to the start"</A></p>
        </section>
    }
}
