use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::config::{Section, BRAND, NAVY};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_sign_in: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let sign_in = {
        let on_sign_in = props.on_sign_in.clone();
        Callback::from(move |_: MouseEvent| on_sign_in.emit(()))
    };

    html! {
      <>
        <header class="sticky top-0 bg-white/90 backdrop-blur border-b z-30">
          <div class="max-w-6xl mx-auto flex justify-between items-center px-4 py-3">
            <div class="flex items-center gap-2 select-none">
              <div class="h-9 w-9 grid place-content-center rounded-2xl shadow-md" style={format!("background-color: {NAVY};")}>
                <Icon glyph={Glyph::Anchor} class="text-white" />
              </div>
              <span class="font-black tracking-wide" style={format!("color: {NAVY};")}>{ BRAND }</span>
            </div>

            <nav class="hidden md:flex items-center gap-4">
              { for Section::all().into_iter().map(|s| html!{
                  <a
                    key={s.anchor()}
                    href={s.href()}
                    class="bg-white text-[rgb(11,27,58)] font-semibold text-sm px-4 py-1.5 rounded-full hover:shadow-md transition-all border border-slate-200"
                  >
                    { s.label() }
                  </a>
              })}
              <button
                class="bg-[rgb(11,27,58)] text-white text-sm px-4 py-1.5 rounded-full hover:bg-[rgb(8,20,44)] transition-all"
                onclick={sign_in.clone()}
              >
                { "Entrar" }
              </button>
            </nav>

            <button onclick={on_toggle_menu} class="md:hidden" aria-label="menu">
              <Icon glyph={if *menu_open { Glyph::Close } else { Glyph::Bars }} />
            </button>
          </div>
        </header>

        if *menu_open {
          <div class="md:hidden border-b bg-white">
            <div class="flex flex-col gap-3 p-4">
              { for Section::all().into_iter().map(|s| html!{
                  <a
                    key={s.anchor()}
                    href={s.href()}
                    class="text-[rgb(11,27,58)] font-semibold text-sm px-4 py-1.5 rounded-full border border-slate-200 text-center"
                  >
                    { s.label() }
                  </a>
              })}
              <button
                class="bg-[rgb(11,27,58)] text-white text-sm px-4 py-1.5 rounded-full"
                onclick={sign_in}
              >
                { "Entrar" }
              </button>
            </div>
          </div>
        }
      </>
    }
}
