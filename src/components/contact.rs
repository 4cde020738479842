use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::config::{contact_href, Section, CONTACT_EMAIL};

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
      <section id={Section::Contact.anchor()} class="py-20">
        <div class="max-w-6xl mx-auto px-4 text-center">
          <h2 class="text-3xl font-bold text-[rgb(11,27,58)] mb-6">{ "Entre em contato" }</h2>
          <p class="text-slate-600 mb-6">{ "Tem dúvidas ou quer saber mais? Fale conosco!" }</p>
          <a
            href={contact_href()}
            class="inline-flex items-center gap-2 bg-[rgb(11,27,58)] text-white px-6 py-2 rounded-full hover:bg-[rgb(8,20,44)] transition"
          >
            <Icon glyph={Glyph::Phone} />{ CONTACT_EMAIL }
          </a>
        </div>
      </section>
    }
}
