mod components;
mod config;
mod content;
mod error;
mod navigation;
mod pages;
mod utils;
mod visibility;

use pages::portfolio::Portfolio;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::get_log_level()));
    log::info!("Starting portfolio frontend");
    yew::Renderer::<Portfolio>::new().render();
}
