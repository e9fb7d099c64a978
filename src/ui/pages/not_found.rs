use dioxus::prelude::*;

use crate::{app::Route, ui::theme};

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "unknown route");

    rsx! {
        section { class: "flex min-h-screen flex-col items-center justify-center gap-6 text-center",
            h1 { class: "gradient-text text-6xl font-bold", "404" }
            p { class: theme::TEXT_MUTED, "Nothing lives at {path}." }
            Link { to: Route::Landing {}, class: theme::BTN_PRIMARY, "Back to the homepage" }
        }
    }
}
