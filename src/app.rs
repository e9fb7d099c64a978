use dioxus::prelude::*;

use crate::{
    domain::LandingState,
    infra::contact::ContactClient,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{LandingPage, NotFoundPage},
        shell::Shell,
    },
    util::{assets, config::LandingConfig},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let config = use_context::<LandingConfig>();

    let state = use_signal(LandingState::new);
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    use_context_provider(|| ContactClient::new(config.submit_delay));

    rsx! {
        document::Title { "ADmyBRAND AI Suite | AI-Powered Marketing" }
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::tailwind_css()}" }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Landing() -> Element {
    rsx! { Shell { LandingPage {} } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! { Shell { NotFoundPage { segments } } }
}
