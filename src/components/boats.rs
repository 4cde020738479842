use gloo::console::log;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::catalog::{CapacityFilter, Offering};
use crate::components::icons::{Glyph, Icon};
use crate::config::Section;

#[derive(Properties, PartialEq)]
pub struct BoatsProps {
    pub offerings: Vec<Offering>,
}

#[function_component(BoatsSection)]
pub fn boats_section(props: &BoatsProps) -> Html {
    let filter = use_state(CapacityFilter::default);

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            let next = CapacityFilter::from_select_value(&sel.value());
            log!(format!("capacity filter: {}", next.label()));
            filter.set(next);
        })
    };

    let visible = filter.apply(&props.offerings);

    html! {
      <section id={Section::Boats.anchor()} class="max-w-6xl mx-auto px-4 py-20">
        <div class="flex items-center justify-between mb-10">
          <h2 class="text-3xl font-bold text-[rgb(11,27,58)]">{ "Lanchas disponíveis" }</h2>
          <div class="flex items-center gap-2 border rounded-full px-3 py-1.5 shadow-sm">
            <Icon glyph={Glyph::Filter} class="text-slate-500" />
            <select
              onchange={on_filter_change}
              class="outline-none bg-transparent text-sm text-slate-600"
            >
              { for CapacityFilter::options().into_iter().map(|opt| html!{
                  <option
                    value={opt.threshold().to_string()}
                    selected={opt == *filter}
                  >
                    { opt.label() }
                  </option>
              })}
            </select>
          </div>
        </div>

        if visible.is_empty() {
          <p class="text-slate-500">{ "Nenhuma lancha para essa capacidade." }</p>
        } else {
          <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
            { for visible.into_iter().map(|b| html!{ <BoatCard offering={b.clone()} /> }) }
          </div>
        }
      </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct BoatCardProps {
    pub offering: Offering,
}

#[function_component(BoatCard)]
fn boat_card(props: &BoatCardProps) -> Html {
    let b = &props.offering;
    html! {
      <div class="border rounded-2xl p-5 shadow-sm hover:shadow-md transition">
        <div class="flex justify-between items-center mb-2">
          <div>
            <p class="font-medium text-[rgb(11,27,58)]">{ b.operator_name.clone() }</p>
            <p class="text-xs text-slate-500">{ b.title.clone() }</p>
          </div>
          <div class="flex items-center gap-1 text-yellow-500 font-semibold text-sm">
            <Icon glyph={Glyph::Star} class="text-yellow-400" />{ format!(" {}", b.rating) }
          </div>
        </div>
        <div class="text-xs text-slate-500">{ format!("Capacidade: {} pessoas", b.capacity) }</div>
        <div class="text-xs text-slate-500 mt-1">{ "Total" }</div>
        <div class="text-lg font-bold text-[rgb(11,27,58)]">{ format!("R$ {}", b.price) }</div>
        // Reservations are out of scope; the button is decorative.
        <button class="bg-[rgb(11,27,58)] text-white w-full mt-3 py-2 rounded-2xl flex items-center justify-center gap-2 hover:bg-[rgb(8,20,44)] transition">
          <Icon glyph={Glyph::CreditCard} />{ " Reservar" }
        </button>
      </div>
    }
}
