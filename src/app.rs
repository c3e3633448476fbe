use dioxus::{prelude::*, signals::Signal};

use crate::{
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{ClimateActionPage, HomePage},
        shell::Shell,
    },
    util::{
        assets,
        version::{self, ReleaseCheck},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/climate-action")]
    ClimateAction {},
}

#[component]
pub fn App() -> Element {
    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    let _release_check = use_resource({
        let toasts = toasts.clone();
        move || async move { announce_new_release(toasts.clone()).await }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Surfaces a toast when a newer tagged release exists on GitHub.
/// A failed lookup never blocks the UI; the dashboard works fully offline.
async fn announce_new_release(toasts: Signal<Vec<ToastMessage>>) -> Option<ReleaseCheck> {
    match version::check_latest_release().await {
        Ok(check) => {
            if check.newer_available() {
                push_toast(
                    toasts.clone(),
                    ToastKind::Info,
                    "Update Available",
                    check.to_string(),
                );
            }
            Some(check)
        }
        Err(err) => {
            println!("Release check failed: {err}");
            None
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn ClimateAction() -> Element {
    rsx! { Shell { ClimateActionPage {} } }
}
