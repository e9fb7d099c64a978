use dioxus::prelude::*;

#[component]
pub fn StatCard(value: String, label: &'static str, accent: Option<&'static str>) -> Element {
    let accent = accent.unwrap_or("text-violet-300");
    rsx! {
        div {
            class: "text-center",
            p { class: "text-xl font-bold {accent}", "{value}" }
            p { class: "mt-1 text-xs text-slate-400", "{label}" }
        }
    }
}
