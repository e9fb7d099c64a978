use dioxus::prelude::*;

use crate::{
    domain::content::{NAV_ITEMS, PRODUCT_NAME},
    ui::theme,
    util::version::{copyright_year, version_label},
};

const PRODUCT_LINKS: [&str; 4] = ["Features", "Pricing", "Integrations", "API"];
const COMPANY_LINKS: [&str; 4] = ["About", "Careers", "Blog", "Press"];
const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];

#[component]
pub fn Footer() -> Element {
    let year = copyright_year();
    let version = version_label();

    rsx! {
        footer { class: "relative border-t border-white/10 py-16",
            div { class: theme::CONTAINER,
                div { class: "grid grid-cols-1 gap-12 md:grid-cols-4",
                    div {
                        div { class: "mb-4 flex items-center gap-2",
                            span { class: "bg-gradient-primary flex h-8 w-8 items-center justify-center rounded-lg text-white", "⚡" }
                            span { class: "gradient-text text-xl font-bold", "ADmyBRAND" }
                        }
                        p { class: "text-sm {theme::TEXT_MUTED}",
                            "AI-powered marketing that creates, optimizes, and scales your campaigns."
                        }
                        div { class: "mt-4 flex gap-2",
                            for item in NAV_ITEMS {
                                a { key: "{item.href}", href: item.href, class: "text-xs text-slate-500 hover:text-violet-300", "{item.label}" }
                            }
                        }
                    }
                    LinkColumn { title: "Product", links: PRODUCT_LINKS.to_vec() }
                    LinkColumn { title: "Company", links: COMPANY_LINKS.to_vec() }
                    LinkColumn { title: "Legal", links: LEGAL_LINKS.to_vec() }
                }
                div { class: "mt-12 flex flex-col items-center justify-between gap-4 border-t border-white/10 pt-8 text-sm text-slate-500 md:flex-row",
                    p { "© {year} {PRODUCT_NAME}. All rights reserved." }
                    p { "{version}" }
                }
            }
        }
    }
}

#[component]
fn LinkColumn(title: &'static str, links: Vec<&'static str>) -> Element {
    rsx! {
        div {
            h4 { class: "mb-4 font-semibold", "{title}" }
            ul { class: "space-y-2",
                for link in links {
                    li { key: "{link}",
                        a { href: "#top", class: "text-sm text-slate-400 transition hover:text-violet-300", "{link}" }
                    }
                }
            }
        }
    }
}
