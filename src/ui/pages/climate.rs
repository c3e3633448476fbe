use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{datasets, ChangeTrend, ClimateReading, ClimateTab, IconKind, Region, TimeFrame},
    ui::{
        components::{
            toast::{push_toast, ToastKind, ToastMessage},
            Icon, MetricCard,
        },
        theme,
    },
};

#[component]
pub fn ClimateActionPage() -> Element {
    let nav = use_navigator();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut selected_region = use_signal(Region::default);
    let mut time_frame = use_signal(TimeFrame::default);
    let mut active_tab = use_signal(ClimateTab::default);

    let on_export = move |_| {
        push_toast(
            toasts.clone(),
            ToastKind::Info,
            "Data Export Initiated",
            "Climate data is being prepared for download.",
        );
    };

    rsx! {
        header { class: "bg-gradient-to-r from-emerald-600 to-green-800 py-8 text-white",
            div { class: "mx-auto max-w-7xl px-6",
                div { class: "mb-4 flex items-center gap-4",
                    button {
                        class: theme::BTN_GHOST_LIGHT,
                        onclick: move |_| { nav.push(Route::Home {}); },
                        Icon { kind: IconKind::ArrowLeft, class: "h-4 w-4" }
                        "Back to Dashboard"
                    }
                }
                div { class: "flex items-center gap-4",
                    Icon { kind: IconKind::Thermometer, class: "h-12 w-12" }
                    div {
                        h1 { class: "text-4xl font-bold", "Climate Action Monitoring" }
                        p { class: "text-xl opacity-90",
                            "Track climate patterns and smart farming solutions"
                        }
                    }
                }
            }
        }

        div { class: "mx-auto max-w-7xl px-6 py-8",
            // Region and time frame update local state only; the series
            // below stay global until per-region data exists.
            div { class: "mb-8 flex flex-col gap-4 sm:flex-row",
                select {
                    class: theme::SELECT,
                    onchange: move |evt| {
                        if let Some(region) = Region::from_id(&evt.value()) {
                            selected_region.set(region);
                        }
                    },
                    for region in Region::ALL {
                        option {
                            value: region.id(),
                            selected: region == selected_region(),
                            "{region.label()}"
                        }
                    }
                }
                select {
                    class: theme::SELECT,
                    onchange: move |evt| {
                        if let Some(frame) = TimeFrame::from_id(&evt.value()) {
                            time_frame.set(frame);
                        }
                    },
                    for frame in TimeFrame::ALL {
                        option {
                            value: frame.id(),
                            selected: frame == time_frame(),
                            "{frame.label()}"
                        }
                    }
                }
                button { class: "{theme::BTN_OUTLINE} sm:ml-auto", onclick: on_export, "Export Data" }
            }

            div { class: "mb-8 grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-4",
                for metric in datasets::climate_metrics() {
                    MetricCard { metric }
                }
            }

            div { class: "grid w-full grid-cols-3 gap-1 rounded-xl bg-slate-100 p-1",
                for tab in ClimateTab::ALL {
                    button {
                        class: theme::tab_button(tab == active_tab()),
                        onclick: move |_| active_tab.set(tab),
                        "{tab.label()}"
                    }
                }
            }

            div { class: "mt-8",
                match active_tab() {
                    ClimateTab::Historical => rsx! { HistoricalPanel {} },
                    ClimateTab::Current => rsx! { CurrentPanel {} },
                    ClimateTab::Farming => rsx! { FarmingPanel {} },
                }
            }
        }
    }
}

#[component]
fn HistoricalPanel() -> Element {
    rsx! {
        div { class: theme::CARD,
            div { class: "border-b border-slate-200 p-6",
                h2 { class: "flex items-center gap-2 text-lg font-semibold",
                    Icon { kind: IconKind::Calendar, class: "h-5 w-5" }
                    "Climate Trends Over Time"
                }
                p { class: "mt-1 text-sm text-slate-500",
                    "Historical climate data showing temperature and precipitation changes"
                }
            }
            div { class: "grid grid-cols-1 gap-8 p-6 lg:grid-cols-2",
                div {
                    h3 { class: "mb-4 flex items-center gap-2 text-lg font-semibold",
                        Icon { kind: IconKind::Thermometer, class: "h-4 w-4 text-rose-600" }
                        "Temperature Changes (°C)"
                    }
                    div { class: "space-y-3",
                        for reading in datasets::temperature_trend() {
                            ReadingRow { reading, unit: "°C", rising_is_favorable: false }
                        }
                    }
                }
                div {
                    h3 { class: "mb-4 flex items-center gap-2 text-lg font-semibold",
                        Icon { kind: IconKind::CloudRain, class: "h-4 w-4 text-sky-600" }
                        "Precipitation Changes (mm)"
                    }
                    div { class: "space-y-3",
                        for reading in datasets::precipitation_trend() {
                            ReadingRow { reading, unit: "mm", rising_is_favorable: true }
                        }
                    }
                }
            }
        }
    }
}

/// One year of a series. Arrow direction follows the sign of the delta;
/// whether that color reads as good or bad depends on the series (more rain
/// is good, more warming is not).
#[component]
fn ReadingRow(reading: ClimateReading, unit: &'static str, rising_is_favorable: bool) -> Element {
    let trend = if reading.is_decline() == rising_is_favorable {
        ChangeTrend::Negative
    } else {
        ChangeTrend::Positive
    };
    let arrow = if reading.is_decline() {
        IconKind::TrendingDown
    } else {
        IconKind::TrendingUp
    };
    let tone = theme::trend_text(trend);

    rsx! {
        div { class: "flex items-center justify-between rounded-lg border border-slate-200 p-3",
            div { class: "flex items-center gap-3",
                span { class: "font-medium", "{reading.year}" }
                span { class: "text-2xl font-bold", "{reading.value}{unit}" }
            }
            div { class: "flex items-center gap-2 {tone}",
                Icon { kind: arrow, class: "h-4 w-4" }
                span { class: "text-sm", "{reading.change}" }
            }
        }
    }
}

#[component]
fn CurrentPanel() -> Element {
    rsx! {
        div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
            div { class: theme::CARD,
                div { class: "p-6",
                    h2 { class: "flex items-center gap-2 text-lg font-semibold",
                        Icon { kind: IconKind::Activity, class: "h-5 w-5" }
                        "Real-Time Climate Monitoring"
                    }
                    div { class: "mt-4 space-y-4",
                        for alert in datasets::condition_alerts() {
                            div { class: "flex items-center justify-between rounded p-4 {theme::severity_row(alert.severity)}",
                                div { class: "flex items-center gap-3",
                                    Icon {
                                        kind: alert.icon,
                                        class: "h-5 w-5 {theme::severity_text(alert.severity)}",
                                    }
                                    div {
                                        p { class: "font-medium", "{alert.title}" }
                                        p { class: "text-sm text-slate-500", "{alert.detail}" }
                                    }
                                }
                                span { class: "text-sm font-semibold {theme::severity_text(alert.severity)}",
                                    "{alert.status}"
                                }
                            }
                        }
                    }
                }
            }
            div { class: theme::CARD,
                div { class: "p-6",
                    h2 { class: "flex items-center gap-2 text-lg font-semibold",
                        Icon { kind: IconKind::MapPin, class: "h-5 w-5" }
                        "Regional Climate Impact"
                    }
                    div { class: "mt-4 space-y-4",
                        for impact in datasets::regional_impacts() {
                            div { class: "rounded-lg border border-slate-200 p-4",
                                div { class: "mb-2 flex items-center justify-between",
                                    h3 { class: "font-medium", "{impact.region}" }
                                    span { class: "text-sm {theme::risk_text(impact.risk)}",
                                        "{impact.risk}"
                                    }
                                }
                                p { class: "text-sm text-slate-500", "{impact.summary}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FarmingPanel() -> Element {
    rsx! {
        div { class: theme::CARD,
            div { class: "border-b border-slate-200 p-6",
                h2 { class: "flex items-center gap-2 text-lg font-semibold",
                    Icon { kind: IconKind::Leaf, class: "h-5 w-5" }
                    "Smart Farming Recommendations"
                }
                p { class: "mt-1 text-sm text-slate-500",
                    "AI-powered agricultural advice based on current climate conditions"
                }
            }
            div { class: "grid grid-cols-1 gap-4 p-6 md:grid-cols-2",
                for rec in datasets::farming_recommendations() {
                    div { class: "rounded-lg border border-slate-200 p-4",
                        div { class: "mb-3 flex items-center justify-between",
                            h3 { class: "font-medium", "{rec.crop}" }
                            span { class: theme::urgency_badge(rec.urgency),
                                "{rec.urgency.label()} priority"
                            }
                        }
                        p { class: "mb-2 text-sm", "{rec.advice}" }
                        div { class: "flex items-center gap-2 text-xs text-slate-500",
                            Icon { kind: IconKind::MapPin, class: "h-3 w-3" }
                            "{rec.region}"
                        }
                    }
                }
            }
        }
    }
}
