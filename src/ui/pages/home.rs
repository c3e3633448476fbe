use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{datasets, IconKind, SdgGoal},
    ui::{
        components::{
            toast::{push_toast, ToastKind, ToastMessage},
            Icon, MetricCard, SdgSection,
        },
        theme,
    },
    util::assets,
};

#[component]
pub fn HomePage() -> Element {
    let nav = use_navigator();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    rsx! {
        // Hero
        section { class: "relative flex h-screen items-center justify-center overflow-hidden",
            div { class: "absolute inset-0",
                img {
                    class: "hero-art h-full w-full object-cover",
                    src: assets::hero_data_uri(),
                    alt: "Earth from space showing environmental sustainability",
                }
                div { class: "absolute inset-0 bg-gradient-to-r from-black/60 to-black/40" }
            }
            div { class: "relative z-10 max-w-4xl px-6 text-center text-white",
                h1 { class: "mb-6 text-5xl font-bold md:text-7xl",
                    "Sustainable Development Goals Platform"
                }
                p { class: "mb-8 text-xl opacity-90 md:text-2xl",
                    "Monitoring Climate Action, Clean Water, Zero Hunger, and Health & Well-being"
                }
                div { class: "flex flex-col justify-center gap-4 sm:flex-row",
                    button {
                        class: "rounded-lg bg-emerald-600 px-6 py-3 text-base font-semibold text-white hover:bg-emerald-700",
                        "Start Monitoring"
                    }
                    button { class: theme::BTN_OUTLINE_LIGHT, "Learn More" }
                }
            }
        }

        // Headline indicators
        section { class: "mx-auto max-w-7xl px-6 py-16",
            div { class: "mb-12 text-center",
                h2 { class: "mb-4 text-3xl font-bold", "Global Impact Dashboard" }
                p { class: "mx-auto max-w-2xl text-slate-500",
                    "Real-time monitoring of key sustainability indicators across all SDGs"
                }
            }
            div { class: "grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-4",
                for metric in datasets::global_metrics() {
                    MetricCard { metric }
                }
            }
        }

        // Focus areas
        section { class: "mx-auto max-w-7xl px-6 py-16",
            div { class: "grid grid-cols-1 gap-8 lg:grid-cols-2",
                SdgSection {
                    title: "Climate Action",
                    description: "Monitor climate changes and smart farming solutions",
                    icon: IconKind::Thermometer,
                    goal: SdgGoal::Climate,
                    action_label: "Access Climate Dashboard",
                    on_action: move |_| { nav.push(Route::ClimateAction {}); },
                    div { class: "space-y-4",
                        StatusRow {
                            icon: IconKind::TrendingUp,
                            tint: "text-emerald-600",
                            label: "Smart Farming Recommendations",
                            value: "Active",
                            emphasis: "",
                        }
                        StatusRow {
                            icon: IconKind::Activity,
                            tint: "text-amber-500",
                            label: "Climate Pattern Analysis",
                            value: "Monitoring",
                            emphasis: "",
                        }
                    }
                }

                SdgSection {
                    title: "Clean Water & Sanitation",
                    description: "Monitor water quality and provide regional alerts",
                    icon: IconKind::Droplets,
                    goal: SdgGoal::Water,
                    action_label: "View Water Quality Data",
                    on_action: move |_| {
                        push_toast(
                            toasts.clone(),
                            ToastKind::Info,
                            "Water Quality Alert System",
                            "Monitoring water quality data for your region.",
                        );
                    },
                    div { class: "space-y-4",
                        StatusRow {
                            icon: IconKind::MapPin,
                            tint: "text-sky-600",
                            label: "Regional Water Quality",
                            value: "Good",
                            emphasis: "text-emerald-600",
                        }
                        StatusRow {
                            icon: IconKind::TrendingDown,
                            tint: "text-rose-600",
                            label: "Contamination Alerts",
                            value: "2 Active",
                            emphasis: "",
                        }
                    }
                }

                SdgSection {
                    title: "Zero Hunger",
                    description: "Food donation platform connecting donors with distribution",
                    icon: IconKind::Wheat,
                    goal: SdgGoal::Earth,
                    action_label: "Start Food Donation",
                    on_action: move |_| {
                        push_toast(
                            toasts.clone(),
                            ToastKind::Info,
                            "Food Donation Platform",
                            "Connecting donors with local distribution centers.",
                        );
                    },
                    div { class: "space-y-4",
                        StatusRow {
                            icon: IconKind::Users,
                            tint: "text-emerald-600",
                            label: "People Fed This Month",
                            value: "12,500",
                            emphasis: "",
                        }
                        StatusRow {
                            icon: IconKind::Leaf,
                            tint: "text-green-800",
                            label: "Government Partnerships",
                            value: "Active",
                            emphasis: "",
                        }
                    }
                }

                SdgSection {
                    title: "Good Health & Well-being",
                    description: "Monitor community health indicators and wellness programs",
                    icon: IconKind::Heart,
                    goal: SdgGoal::Health,
                    action_label: "Access Health Dashboard",
                    on_action: move |_| {
                        push_toast(
                            toasts.clone(),
                            ToastKind::Info,
                            "Health Monitoring Dashboard",
                            "Tracking community health indicators.",
                        );
                    },
                    div { class: "space-y-4",
                        StatusRow {
                            icon: IconKind::Activity,
                            tint: "text-rose-500",
                            label: "Health Coverage Rate",
                            value: "81%",
                            emphasis: "",
                        }
                        StatusRow {
                            icon: IconKind::TrendingUp,
                            tint: "text-emerald-600",
                            label: "Wellness Programs",
                            value: "Active",
                            emphasis: "",
                        }
                    }
                }
            }
        }

        // Closing call to action
        section { class: "bg-gradient-to-r from-emerald-600 to-sky-600 px-6 py-16",
            div { class: "mx-auto max-w-4xl text-center text-white",
                h2 { class: "mb-4 text-3xl font-bold", "Join the Global Sustainability Movement" }
                p { class: "mb-8 text-xl opacity-90",
                    "Together, we can monitor, act, and create a sustainable future for all"
                }
                div { class: "flex flex-col justify-center gap-4 sm:flex-row",
                    button { class: theme::BTN_SECONDARY, "Get Involved" }
                    button { class: theme::BTN_OUTLINE_LIGHT, "Contact Government Partners" }
                }
            }
        }
    }
}

#[component]
fn StatusRow(
    icon: IconKind,
    tint: &'static str,
    label: &'static str,
    value: &'static str,
    emphasis: &'static str,
) -> Element {
    rsx! {
        div { class: "flex items-center justify-between rounded-lg bg-slate-100 p-3",
            div { class: "flex items-center gap-2",
                Icon { kind: icon, class: "h-4 w-4 {tint}" }
                span { class: "text-sm", "{label}" }
            }
            span { class: "text-sm font-semibold {emphasis}", "{value}" }
        }
    }
}
