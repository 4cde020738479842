use gloo::console::log;
use lanchas::{app::App, config};

fn main() {
    log!(format!("{} v{} starting", config::BRAND, env!("CARGO_PKG_VERSION")));
    yew::Renderer::<App>::new().render();
}
