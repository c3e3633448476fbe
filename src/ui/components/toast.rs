use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const TOAST_QUEUE_CAP: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A fire-and-forget notification. Callers never read anything back.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            title: title.into(),
            description: description.into(),
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    title: impl Into<String>,
    description: impl Into<String>,
) {
    let message = ToastMessage::new(kind, title, description);
    toasts.with_mut(|entries| enqueue(entries, message));
}

fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= TOAST_QUEUE_CAP {
        entries.remove(0);
    }
    entries.push(message);
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
            class: "pointer-events-none fixed inset-x-0 bottom-4 flex justify-center",
            ul {
                class: "space-y-3",
                for view in views {
                    ToastCard { view, toasts: toasts.clone() }
                }
            }
        }
    }
}

#[component]
fn ToastCard(view: ToastView, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toasts_for_timer = toasts.clone();
    let toast_id = view.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts_for_timer.clone();
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let class = format!(
        "pointer-events-auto flex items-start gap-3 rounded-xl border bg-white px-4 py-3 shadow-lg {}",
        view.theme
    );
    rsx! {
        li {
            class: class,
            span { class: "text-lg", "{view.icon}" }
            div {
                p { class: "text-sm font-semibold text-slate-900", "{view.title}" }
                p { class: "text-sm text-slate-600", "{view.description}" }
            }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-400 hover:text-slate-700",
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
    description: String,
    theme: &'static str,
    icon: &'static str,
}

impl From<ToastMessage> for ToastView {
    fn from(message: ToastMessage) -> Self {
        let (theme, icon) = match message.kind {
            ToastKind::Info => ("border-sky-300", "ℹ️"),
            ToastKind::Success => ("border-emerald-300", "✅"),
            ToastKind::Warning => ("border-amber-300", "⚠️"),
            ToastKind::Error => ("border-rose-300", "⛔"),
        };

        ToastView {
            id: message.id,
            title: message.title,
            description: message.description,
            theme,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_after(pushes: usize) -> Vec<ToastMessage> {
        let mut entries = Vec::new();
        for n in 0..pushes {
            let message = ToastMessage::new(ToastKind::Info, format!("Toast {n}"), "detail");
            enqueue(&mut entries, message);
        }
        entries
    }

    #[test]
    fn queue_keeps_arrival_order() {
        let entries = queue_after(3);
        let titles: Vec<&str> = entries.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Toast 0", "Toast 1", "Toast 2"]);
    }

    #[test]
    fn queue_caps_at_five_evicting_the_oldest() {
        let entries = queue_after(7);
        assert_eq!(entries.len(), TOAST_QUEUE_CAP);
        assert_eq!(entries.first().unwrap().title, "Toast 2");
        assert_eq!(entries.last().unwrap().title, "Toast 6");
    }

    #[test]
    fn messages_get_unique_ids() {
        let a = ToastMessage::new(ToastKind::Success, "A", "first");
        let b = ToastMessage::new(ToastKind::Success, "A", "first");
        assert_ne!(a.id, b.id);
    }
}
