use gloo::console::error;
use yew::prelude::*;

use crate::catalog::Catalog;
use crate::components::about::AboutSection;
use crate::components::auth_modal::AuthModal;
use crate::components::boats::BoatsSection;
use crate::components::captains::CaptainsSection;
use crate::components::contact::ContactSection;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::state::{AuthModalAction, AuthModalState, AuthTab};

fn load_catalog() -> Catalog {
    match Catalog::bundled() {
        Ok(c) => c,
        Err(e) => {
            error!(format!("catalog unavailable, rendering empty listing: {e}"));
            Catalog::default()
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let catalog = use_memo((), |_| load_catalog());
    let auth = use_reducer(AuthModalState::default);

    let on_sign_in = {
        let auth = auth.clone();
        Callback::from(move |_: ()| auth.dispatch(AuthModalAction::Open))
    };

    let on_change_tab = {
        let auth = auth.clone();
        Callback::from(move |tab: AuthTab| auth.dispatch(AuthModalAction::SelectTab(tab)))
    };

    let on_close = {
        let auth = auth.clone();
        Callback::from(move |_: ()| auth.dispatch(AuthModalAction::Close))
    };

    html! {
      <div class="min-h-screen bg-white text-slate-900">
        <Header {on_sign_in} />

        <main>
          <Hero />
          <BoatsSection offerings={catalog.offerings.clone()} />
          <CaptainsSection captains={catalog.captains.clone()} />
          <AboutSection />
          <ContactSection />
        </main>

        <Footer />

        if auth.open {
          <AuthModal tab={auth.tab} {on_change_tab} {on_close} />
        }
      </div>
    }
}
