use gloo::console::log;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::booking::{parse_seats, BookingDraft};
use crate::components::icons::{Glyph, Icon};
use crate::config::Section;

#[function_component(Hero)]
pub fn hero() -> Html {
    let boats = Section::Boats.href();

    html! {
      <section id={Section::HowItWorks.anchor()} class="relative overflow-hidden">
        <div class="absolute inset-0 -z-10 bg-[rgb(11,27,58)]"></div>
        <div class="max-w-6xl mx-auto px-4 py-20 text-white grid md:grid-cols-2 gap-10 items-center">
          <div class="rise-in">
            <h1 class="text-4xl md:text-5xl font-extrabold leading-tight">{ "Chegue por água, no seu tempo." }</h1>
            <p class="mt-4 text-white/80 text-lg">
              { "Reserve lanchas com segurança, preço transparente e capitães avaliados." }
            </p>
            <div class="mt-6 flex gap-3">
              <a
                href={boats.clone()}
                class="bg-white text-[rgb(11,27,58)] font-semibold px-5 py-2 rounded-full hover:bg-white/90 transition"
              >
                { "Começar agora" }
              </a>
              <a
                href={boats}
                class="border border-white text-white px-5 py-2 rounded-full hover:bg-white/10 transition"
              >
                { "Ver rotas" }
              </a>
            </div>
            <div class="mt-6 flex items-center gap-2 text-white/80">
              <Icon glyph={Glyph::Star} class="text-yellow-400" />
              <span>{ "4.8/5 média de satisfação • 10k+ viagens" }</span>
            </div>
          </div>
          <div class="rise-in-late">
            <BookingWidget />
          </div>
        </div>
      </section>
    }
}

fn bind_input(draft: UseStateHandle<BookingDraft>, mutator: fn(&mut BookingDraft, String)) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        mutator(&mut next, input.value());
        draft.set(next);
    })
}

#[function_component(BookingWidget)]
pub fn booking_widget() -> Html {
    let draft = use_state(BookingDraft::default);

    let on_origin = bind_input(draft.clone(), |d, v| d.origin = v);
    let on_destination = bind_input(draft.clone(), |d, v| d.destination = v);
    let on_date = bind_input(draft.clone(), |d, v| d.date = v);
    let on_seats = bind_input(draft.clone(), |d, v| d.seats = parse_seats(&v));

    // No search backend; the draft is only echoed to the console.
    let on_search = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            log!(format!("booking search not wired: {}", draft.summary()));
        })
    };

    html! {
      <div class="bg-white rounded-2xl shadow-xl p-5 text-slate-700" id="rotas">
        <h3 class="font-bold text-[rgb(11,27,58)] flex items-center gap-2">
          <Icon glyph={Glyph::Ship} />{ " Reservar lancha" }
        </h3>
        <div class="grid grid-cols-2 gap-3 mt-4">
          <input
            class="border rounded-xl px-3 py-2"
            placeholder="Origem"
            value={draft.origin.clone()}
            oninput={on_origin}
          />
          <input
            class="border rounded-xl px-3 py-2"
            placeholder="Destino"
            value={draft.destination.clone()}
            oninput={on_destination}
          />
          <input
            type="date"
            class="border rounded-xl px-3 py-2 col-span-2"
            value={draft.date.clone()}
            oninput={on_date}
          />
          <input
            type="number"
            min="1"
            class="border rounded-xl px-3 py-2 col-span-2"
            value={draft.seats.to_string()}
            oninput={on_seats}
          />
        </div>
        <button
          class="bg-[rgb(11,27,58)] text-white font-semibold w-full mt-4 py-2 rounded-full hover:bg-[rgb(8,20,44)] transition"
          onclick={on_search}
        >
          { "Ver opções" }
        </button>
      </div>
    }
}
