use dioxus::prelude::*;

use crate::domain::Metric;
use crate::ui::{components::icon::Icon, theme};

#[component]
pub fn MetricCard(metric: Metric) -> Element {
    let trend_class = theme::trend_text(metric.trend);

    rsx! {
        div { class: "{theme::CARD} p-6",
            div { class: "flex items-center justify-between",
                h3 { class: "text-sm font-medium text-slate-500", "{metric.title}" }
                Icon { kind: metric.icon, class: "h-5 w-5 text-slate-400" }
            }
            p { class: "mt-2 text-3xl font-bold", "{metric.value}" }
            p { class: "mt-1 text-sm {trend_class}", "{metric.change}" }
        }
    }
}
