use dioxus::prelude::*;

use crate::ui::sections::{Footer, Navigation};

/// Page chrome: fixed navigation, background glow and footer.
#[component]
pub fn Shell(children: Element) -> Element {
    rsx! {
        div { class: "relative min-h-screen overflow-x-hidden bg-[#05060f] font-sans text-slate-100",
            div { class: "pointer-events-none fixed inset-0 -z-10",
                div { class: "absolute -top-40 left-1/4 h-96 w-96 rounded-full bg-violet-600/20 blur-3xl" }
                div { class: "absolute bottom-0 right-1/4 h-96 w-96 rounded-full bg-cyan-500/10 blur-3xl" }
            }
            Navigation {}
            main { {children} }
            Footer {}
        }
    }
}
