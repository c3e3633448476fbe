use dioxus::prelude::*;

use crate::domain::{IconKind, SdgGoal};
use crate::ui::{components::icon::Icon, theme};

/// Card shell for one SDG focus area: a gradient header over caller-supplied
/// body content, closed by a single action button. The action fires once per
/// click with no payload; what it does is entirely the parent page's call.
#[component]
pub fn SdgSection(
    title: &'static str,
    description: &'static str,
    icon: IconKind,
    goal: SdgGoal,
    action_label: &'static str,
    on_action: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        section { class: "{theme::CARD} overflow-hidden",
            header { class: "bg-gradient-to-r {theme::sdg_gradient(goal)} px-6 py-5 text-white",
                div { class: "flex items-center gap-3",
                    Icon { kind: icon, class: "h-8 w-8" }
                    div {
                        h3 { class: "text-xl font-semibold", "{title}" }
                        p { class: "text-sm text-white/90", "{description}" }
                    }
                }
            }
            div { class: "p-6",
                {children}
                button {
                    class: "mt-4 w-full {theme::BTN_PRIMARY}",
                    onclick: move |_| on_action.call(()),
                    "{action_label}"
                }
            }
        }
    }
}
