use leptos::*;
use leptos_router::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="card">
            <h2>"Welcome"</h2>
            <p>"Small tools living behind one page:"</p>
            <ul>
                <li>
                    <A href="/rasq/">"Random sequence"</A>
                    ": ask the backend for up to ten random numbers."
                </li>
                <li>
                    <A href="/memo/">"Memo"</A>
                    ": saved links and notes, grouped by section."
                </li>
            </ul>
        </section>
    }
}
