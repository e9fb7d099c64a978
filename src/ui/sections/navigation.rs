use dioxus::prelude::*;

use crate::{
    domain::{content::NAV_ITEMS, LandingState},
    ui::theme,
};

const SCROLL_LISTENER: &str = r#"
    dioxus.send(window.scrollY);
    window.addEventListener("scroll", () => dioxus.send(window.scrollY), { passive: true });
"#;

#[component]
pub fn Navigation() -> Element {
    let mut state = use_context::<Signal<LandingState>>();
    let nav = state.with(|st| st.nav);

    let _scroll_watch = use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER);
        loop {
            match listener.recv::<f64>().await {
                Ok(offset) => {
                    let scrolled = offset > crate::domain::app_state::NAV_SCROLL_THRESHOLD;
                    // Avoid rerendering on every scroll tick.
                    if state.with(|st| st.nav.scrolled) != scrolled {
                        state.with_mut(|st| st.nav.on_scroll(offset));
                    }
                }
                Err(err) => {
                    tracing::debug!(?err, "scroll listener closed");
                    break;
                }
            }
        }
    });

    let header_class = if nav.scrolled {
        "glass-card fixed inset-x-0 top-0 z-40 py-2 transition-all duration-300"
    } else {
        "fixed inset-x-0 top-0 z-40 py-4 transition-all duration-300"
    };

    rsx! {
        header { class: "{header_class}",
            nav { class: "{theme::CONTAINER} flex items-center justify-between",
                a { href: "#top", class: "flex items-center gap-2",
                    span { class: "bg-gradient-primary flex h-8 w-8 items-center justify-center rounded-lg text-white", "⚡" }
                    span { class: "gradient-text text-xl font-bold", "ADmyBRAND" }
                }
                div { class: "hidden items-center gap-8 md:flex",
                    for item in NAV_ITEMS {
                        a {
                            key: "{item.href}",
                            href: item.href,
                            class: "text-slate-300 transition hover:text-violet-300",
                            "{item.label}"
                        }
                    }
                }
                div { class: "hidden md:block",
                    a { href: "#contact", class: "bg-gradient-primary rounded-lg px-4 py-2 text-sm font-semibold text-white hover-glow", "Get Started" }
                }
                button {
                    class: "md:hidden text-2xl text-slate-200",
                    onclick: move |_| state.with_mut(|st| st.nav.toggle_menu()),
                    if nav.menu_open { "✕" } else { "☰" }
                }
            }
            if nav.menu_open {
                div { class: "glass-card mt-2 border-t border-white/10 md:hidden",
                    div { class: "{theme::CONTAINER} flex flex-col gap-4 py-4",
                        for item in NAV_ITEMS {
                            a {
                                key: "{item.href}",
                                href: item.href,
                                class: "text-slate-300 hover:text-violet-300",
                                onclick: move |_| state.with_mut(|st| st.nav.close_menu()),
                                "{item.label}"
                            }
                        }
                        a {
                            href: "#contact",
                            class: "bg-gradient-primary rounded-lg px-4 py-2 text-center text-sm font-semibold text-white",
                            onclick: move |_| state.with_mut(|st| st.nav.close_menu()),
                            "Get Started"
                        }
                    }
                }
            }
        }
    }
}
