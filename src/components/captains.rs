use yew::prelude::*;

use crate::catalog::Captain;
use crate::config::Section;

#[derive(Properties, PartialEq)]
pub struct CaptainsProps {
    pub captains: Vec<Captain>,
}

#[function_component(CaptainsSection)]
pub fn captains_section(props: &CaptainsProps) -> Html {
    html! {
      <section id={Section::Captains.anchor()} class="bg-slate-50 py-16">
        <div class="max-w-6xl mx-auto px-4">
          <h2 class="text-3xl font-bold text-[rgb(11,27,58)] mb-6">{ "Capitães" }</h2>
          <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
            { for props.captains.iter().map(|c| html!{
                <div key={c.name.clone()} class="rounded-2xl border bg-white p-5 shadow-sm">
                  <p class="font-semibold text-[rgb(11,27,58)]">{ c.name.clone() }</p>
                  <p class="text-slate-600 text-sm">{ c.experience.clone() }</p>
                </div>
            })}
          </div>
        </div>
      </section>
    }
}
