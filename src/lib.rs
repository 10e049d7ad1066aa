use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

mod api;
mod components;
mod error;
mod request;
mod types;

use components::form_page::FormPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="min-h-screen bg-gray-100 py-12 px-4">
                <div class="max-w-xl mx-auto">
                    <Routes fallback=|| "Not found.">
                        <Route path=path!("/") view=FormPage/>
                        <Route path=path!("/form/:session_id") view=FormPage/>
                    </Routes>
                </div>
            </main>
        </Router>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
