use yew::prelude::*;
use shared::{initialize_page, DomTarget, page::DEMO_ID};
use crate::api::{HttpGateway, HttpVoteStore};
use crate::config::CONFIG;
use crate::dom;
use crate::styles::*;
use crate::vote_form::VoteForm;

/// Static page shell. The region contents are written by `initialize_page`
/// after the first render, so this component never re-renders them.
#[function_component]
pub fn Showcase() -> Html {
    use_effect_with_deps(|_| {
        wasm_bindgen_futures::spawn_local(async move {
            let store = HttpVoteStore::new(CONFIG.api_base_url);
            let update = initialize_page(&HttpGateway, &store, &CONFIG.page_config()).await;
            dom::apply(&update);
        });
        || ()
    }, ());

    let open_demo = Callback::from(|_: MouseEvent| dom::open_in_new_tab(CONFIG.demo_url));

    html! {
        <div class={CONTAINER}>
            <h1 class={HEADING_LG}>{"Productos destacados"}</h1>
            <div class="text-center mb-8">
                <button id={DEMO_ID} type="button" class={button_dark()} onclick={open_demo}>
                    {"Ver demo"}
                </button>
            </div>

            <div id={DomTarget::Products.id()} class={combine_classes(PRODUCT_GRID, "mb-10")}></div>

            <div class="grid gap-6 md:grid-cols-2">
                <div class={CARD}>
                    <h2 class={HEADING_MD}>{"Categorías"}</h2>
                    <select id={DomTarget::Categories.id()} class={SELECT_BASE}></select>
                </div>
                <div class={CARD}>
                    <h2 class={HEADING_MD}>{"Votación"}</h2>
                    <VoteForm />
                </div>
            </div>

            <div class={combine_classes(CARD, "mt-10")}>
                <h2 class={HEADING_MD}>{"Resultados"}</h2>
                <div id={DomTarget::Results.id()} class="overflow-x-auto">
                    <p class={TEXT_MUTED}>{"Cargando votos..."}</p>
                </div>
            </div>

            <div id={DomTarget::Toast.id()} class={TOAST} role="alert">
                <span class="mb-1 text-sm font-semibold text-gray-900 dark:text-white">{"¡Nuevo!"}</span>
                <div class="mb-2 text-sm font-normal">{"Vota por tu producto favorito y mira los resultados."}</div>
            </div>
        </div>
    }
}
