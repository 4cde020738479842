use js_sys::Date;
use yew::prelude::*;

use crate::config::{BRAND, FOOTER_TAGLINE};

fn current_year() -> u32 {
    Date::new_0().get_full_year()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
      <footer class="bg-white border-t mt-20">
        <div class="max-w-6xl mx-auto px-4 py-10 grid md:grid-cols-3 gap-6 text-sm">
          <div>
            <p class="font-black text-[rgb(11,27,58)]">{ BRAND }</p>
            <p class="text-slate-600">{ FOOTER_TAGLINE }</p>
          </div>
          <div>
            <p class="font-semibold text-[rgb(11,27,58)] mb-2">{ "Empresa" }</p>
            <ul class="text-slate-600 space-y-1">
              <li>{ "Sobre" }</li>
              <li>{ "Carreiras" }</li>
              <li>{ "Imprensa" }</li>
            </ul>
          </div>
          <div>
            <p class="font-semibold text-[rgb(11,27,58)] mb-2">{ "Suporte" }</p>
            <ul class="text-slate-600 space-y-1">
              <li>{ "Ajuda" }</li>
              <li>{ "Termos & Privacidade" }</li>
            </ul>
          </div>
        </div>
        <div class="text-center text-xs text-slate-500 py-4">
          { format!("© {} {} • Made at sea", current_year(), BRAND) }
        </div>
      </footer>
    }
}
