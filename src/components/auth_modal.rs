use gloo::console::log;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::state::AuthTab;

#[derive(Properties, PartialEq)]
pub struct AuthModalProps {
    pub tab: AuthTab,
    pub on_change_tab: Callback<AuthTab>,
    pub on_close: Callback<()>,
}

/// Login/signup shell. Field values are owned here and dropped when the
/// modal unmounts.
#[function_component(AuthModal)]
pub fn auth_modal(props: &AuthModalProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let tab = props.tab;
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log!(format!(
                "{:?} form for {:?} not sent: no auth backend",
                tab, *email
            ));
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let tab_button = |tab: AuthTab| {
        let on_change_tab = props.on_change_tab.clone();
        let active = props.tab == tab;
        html! {
          <button
            type="button"
            onclick={Callback::from(move |_: MouseEvent| on_change_tab.emit(tab))}
            class={classes!(
                "w-1/2", "py-2", "font-semibold",
                if active { "bg-[rgb(11,27,58)] text-white" } else { "bg-slate-100 text-slate-600" }
            )}
          >
            { tab.label() }
          </button>
        }
    };

    html! {
      <div class="fixed inset-0 bg-black/40 backdrop-blur-sm flex items-center justify-center z-50">
        <div class="bg-white rounded-2xl shadow-2xl w-full max-w-md p-6">
          <div class="flex justify-between items-center mb-4">
            <h3 class="text-xl font-bold text-[rgb(11,27,58)]">{ props.tab.heading() }</h3>
            <button onclick={on_close} aria-label="Fechar">
              <Icon glyph={Glyph::Close} class="text-slate-500" />
            </button>
          </div>

          <div class="flex mb-4 border rounded-full overflow-hidden">
            { for AuthTab::all().into_iter().map(tab_button) }
          </div>

          <form class="space-y-4" onsubmit={on_submit}>
            <div>
              <label class="text-sm font-medium text-slate-600">{ "Email" }</label>
              <div class="relative">
                <Icon glyph={Glyph::Envelope} class="absolute left-3 top-1/2 -translate-y-1/2 text-slate-400" />
                <input
                  type="email"
                  placeholder="voce@exemplo.com"
                  class="border rounded-xl pl-9 py-2 w-full"
                  value={(*email).clone()}
                  oninput={on_email}
                />
              </div>
            </div>
            <div>
              <label class="text-sm font-medium text-slate-600">{ "Senha" }</label>
              <div class="relative">
                <Icon glyph={Glyph::Lock} class="absolute left-3 top-1/2 -translate-y-1/2 text-slate-400" />
                <input
                  type="password"
                  placeholder="••••••••"
                  class="border rounded-xl pl-9 py-2 w-full"
                  value={(*password).clone()}
                  oninput={on_password}
                />
              </div>
            </div>
            <button
              type="submit"
              class="bg-[rgb(11,27,58)] text-white w-full py-2 rounded-full font-semibold hover:bg-[rgb(8,20,44)] transition"
            >
              { props.tab.submit_label() }
            </button>
          </form>
        </div>
      </div>
    }
}
