use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::config::{Section, BRAND};

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
      <section id={Section::About.anchor()} class="bg-slate-50 py-20">
        <div class="max-w-6xl mx-auto px-4 grid md:grid-cols-2 gap-10 items-center">
          <div>
            <h2 class="text-3xl font-bold text-[rgb(11,27,58)] mb-4">{ "Sobre nós" }</h2>
            <p class="text-slate-600 leading-relaxed">
              { format!("A {BRAND} conecta pessoas e experiências únicas através do mar. ") }
              { "Nosso compromisso é oferecer conforto, segurança e uma navegação inesquecível, " }
              { "com os melhores capitães e embarcações disponíveis." }
            </p>
          </div>
          <div class="flex justify-center">
            <Icon glyph={Glyph::Info} class="text-7xl text-[rgb(11,27,58)]" />
          </div>
        </div>
      </section>
    }
}
