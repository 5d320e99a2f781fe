use yew::prelude::*;

mod api;
mod config;
mod dom;
mod showcase;
mod styles;
mod vote_form;

use crate::showcase::Showcase;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            <Showcase />
        </div>
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::error_1(&format!("Failed to initialize logger: {e}").into());
        }
    }
    yew::Renderer::<App>::new().render();
}
