use yew::prelude::*;
use web_sys::HtmlSelectElement;
use shared::{submit_vote, Notice, page::{FORM_VOTING_ID, SELECT_PRODUCT_ID}};
use crate::api::HttpVoteStore;
use crate::config::CONFIG;
use crate::dom::show_notice;
use crate::styles::*;

pub enum Msg {
    Submit,
    SubmissionComplete(Notice),
}

/// Vote form. The selector offers `Producto 1..=N` for the configured card
/// limit; it is a fixed list and does not follow the fetched products.
pub struct VoteForm {
    select: NodeRef,
    submitting: bool,
}

impl Component for VoteForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            select: NodeRef::default(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                self.submitting = true;

                let selected = self.select.cast::<HtmlSelectElement>().map(|select| select.value());
                ctx.link().send_future(async move {
                    let store = HttpVoteStore::new(CONFIG.api_base_url);
                    Msg::SubmissionComplete(submit_vote(&store, selected.as_deref()).await)
                });
                true
            }
            Msg::SubmissionComplete(notice) => {
                self.submitting = false;
                show_notice(&notice);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });

        html! {
            <form id={FORM_VOTING_ID} class="space-y-4" {onsubmit}>
                <label for={SELECT_PRODUCT_ID} class={TEXT_LABEL}>{"Vota por tu producto favorito"}</label>
                <select id={SELECT_PRODUCT_ID} ref={self.select.clone()} class={SELECT_BASE}>
                    <option value="" selected={true} disabled={true}>{"Seleccione un producto"}</option>
                    {for (1..=CONFIG.product_card_limit).map(|i| html! {
                        <option value={i.to_string()}>{format!("Producto {i}")}</option>
                    })}
                </select>
                <button type="submit" class={button_primary()} disabled={self.submitting}>
                    {if self.submitting { "Enviando..." } else { "Votar" }}
                </button>
            </form>
        }
    }
}
