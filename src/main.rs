use dioxus::prelude::*;

mod amount;
mod balance;
mod components;
mod config;
mod dispatcher;
mod error;
mod swap;

use components::*;
use config::SwapConfig;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    SwapView {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default().with_max_level(log::LevelFilter::Info),
    );

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(SwapConfig::from_env);
    use_context_provider(|| balance::source_from_config(&config));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
