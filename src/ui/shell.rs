use dioxus::prelude::*;

/// Common page chrome: the routed page renders inside the shared backdrop.
#[component]
pub fn Shell(children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gradient-to-b from-slate-50 to-slate-200 font-sans text-slate-900",
            {children}
        }
    }
}
