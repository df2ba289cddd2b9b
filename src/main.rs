use leptos::*;
use memo_spa::app::App;
use memo_spa::config;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!(
        "starting in {} mode, api base {}",
        config::build_mode(),
        config::default_api_base_url()
    );
    mount_to_body(|| view! { <App/> })
}
