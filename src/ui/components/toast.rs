use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(5);
const MAX_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub title: String,
    pub detail: Option<String>,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, title: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            title: title.into(),
            detail,
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    title: impl Into<String>,
    detail: Option<String>,
) {
    let message = ToastMessage::new(kind, title, detail);
    toasts.with_mut(|entries| enqueue(entries, message));
}

/// Appends `message`, evicting the oldest entries beyond [`MAX_TOASTS`].
fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    entries.push(message);
    if entries.len() > MAX_TOASTS {
        let overflow = entries.len() - MAX_TOASTS;
        entries.drain(..overflow);
    }
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let views = toasts()
        .into_iter()
        .map(ToastView::from)
        .collect::<Vec<_>>();

    if views.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-6 z-50 flex justify-center",
            ul {
                class: "space-y-3",
                for view in views {
                    ToastCard { key: "{view.id}", view, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(view: ToastView, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toast_id = view.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let class = format!(
        "glass-card pointer-events-auto flex items-start gap-3 rounded-xl border px-4 py-3 shadow-lg {}",
        view.theme
    );
    let mut toasts = toasts;
    rsx! {
        li {
            class: class,
            span { class: "text-lg", "{view.icon}" }
            div {
                p { class: "text-sm font-semibold", "{view.title}" }
                if let Some(detail) = view.detail.clone() {
                    p { class: "text-xs text-slate-300", "{detail}" }
                }
            }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| {
                    let target = view.id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct ToastView {
    id: String,
    title: String,
    detail: Option<String>,
    theme: &'static str,
    icon: &'static str,
}

impl From<ToastMessage> for ToastView {
    fn from(message: ToastMessage) -> Self {
        let (theme, icon) = match message.kind {
            ToastKind::Success => ("border-emerald-500/40 text-emerald-100", "✅"),
            ToastKind::Error => ("border-rose-500/40 text-rose-100", "⛔"),
        };

        ToastView {
            id: message.id,
            title: message.title,
            detail: message.detail,
            theme,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_evicts_oldest_beyond_limit() {
        let mut entries = Vec::new();
        for idx in 0..5 {
            enqueue(
                &mut entries,
                ToastMessage::new(ToastKind::Success, format!("sent {idx}"), None),
            );
        }

        let titles: Vec<_> = entries.iter().map(|toast| toast.title.as_str()).collect();
        assert_eq!(titles, ["sent 2", "sent 3", "sent 4"]);
    }

    #[test]
    fn queue_below_limit_keeps_everything() {
        let mut entries = Vec::new();
        enqueue(&mut entries, ToastMessage::new(ToastKind::Success, "a", None));
        enqueue(
            &mut entries,
            ToastMessage::new(ToastKind::Error, "b", Some("please fill in: Email".into())),
        );

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].kind, ToastKind::Error);
        assert_ne!(entries[0].id, entries[1].id);
    }
}
