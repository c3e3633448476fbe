//! Styling keyed off domain enums, so every color treatment is an
//! exhaustive match with no runtime fallback.

use crate::domain::{ChangeTrend, RiskLevel, SdgGoal, Severity, Urgency};

// ============================================
// SDG SECTION HEADERS
// ============================================

/// Gradient stops for a section header, one pair per focus area.
pub fn sdg_gradient(goal: SdgGoal) -> &'static str {
    match goal {
        SdgGoal::Earth => "from-emerald-600 to-green-800",
        SdgGoal::Water => "from-sky-600 to-cyan-400",
        SdgGoal::Climate => "from-emerald-600 to-amber-400",
        SdgGoal::Health => "from-rose-500 to-sky-600",
    }
}

// ============================================
// INDICATOR TREATMENTS
// ============================================

pub fn trend_text(trend: ChangeTrend) -> &'static str {
    match trend {
        ChangeTrend::Positive => "text-emerald-600",
        ChangeTrend::Negative => "text-rose-600",
        ChangeTrend::Neutral => "text-slate-500",
    }
}

pub fn urgency_badge(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::High => "rounded-full bg-rose-100 px-2 py-1 text-xs text-rose-700",
        Urgency::Medium => "rounded-full bg-amber-100 px-2 py-1 text-xs text-amber-700",
        Urgency::Low => "rounded-full bg-emerald-100 px-2 py-1 text-xs text-emerald-700",
    }
}

pub fn severity_row(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => {
            "border-l-4 border-rose-500 bg-gradient-to-r from-rose-500/10 to-rose-500/5"
        }
        Severity::Watch => {
            "border-l-4 border-amber-400 bg-gradient-to-r from-amber-400/10 to-amber-400/5"
        }
        Severity::Healthy => {
            "border-l-4 border-emerald-600 bg-gradient-to-r from-emerald-600/10 to-emerald-600/5"
        }
    }
}

pub fn severity_text(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "text-rose-600",
        Severity::Watch => "text-amber-500",
        Severity::Healthy => "text-emerald-600",
    }
}

pub fn risk_text(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Critical => "text-rose-600",
        RiskLevel::High => "text-rose-600",
        RiskLevel::Moderate => "text-amber-500",
    }
}

// ============================================
// SHARED CONTROLS
// ============================================

pub fn tab_button(active: bool) -> &'static str {
    if active {
        "rounded-lg bg-white px-4 py-2 text-sm font-semibold text-slate-900 shadow"
    } else {
        "rounded-lg px-4 py-2 text-sm text-slate-500 transition hover:text-slate-900"
    }
}

pub const BTN_PRIMARY: &str =
    "rounded-lg bg-emerald-600 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-700";

pub const BTN_SECONDARY: &str =
    "rounded-lg bg-white px-6 py-3 text-base font-semibold text-slate-900 hover:bg-slate-100";

pub const BTN_OUTLINE: &str =
    "rounded-lg border border-slate-300 bg-white px-4 py-2 text-sm font-semibold text-slate-700 hover:bg-slate-50";

/// Outline button for use on dark or gradient backgrounds.
pub const BTN_OUTLINE_LIGHT: &str =
    "rounded-lg border border-white px-6 py-3 text-base font-semibold text-white transition hover:bg-white hover:text-slate-900";

/// Low-emphasis button for use on gradient headers.
pub const BTN_GHOST_LIGHT: &str =
    "flex items-center gap-2 rounded-lg px-3 py-1.5 text-sm text-white transition hover:bg-white/20";

pub const SELECT: &str =
    "w-[200px] rounded-lg border border-slate-300 bg-white px-3 py-2 text-sm text-slate-900 focus:border-emerald-500 focus:outline-none";

pub const CARD: &str = "rounded-xl border border-slate-200 bg-white shadow-sm";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_goal_gets_its_own_gradient() {
        let gradients = [
            sdg_gradient(SdgGoal::Earth),
            sdg_gradient(SdgGoal::Water),
            sdg_gradient(SdgGoal::Climate),
            sdg_gradient(SdgGoal::Health),
        ];
        for (i, a) in gradients.iter().enumerate() {
            assert!(a.starts_with("from-"));
            for b in gradients.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn trend_colors_split_favorable_from_unfavorable() {
        assert_eq!(trend_text(ChangeTrend::Positive), "text-emerald-600");
        assert_eq!(trend_text(ChangeTrend::Negative), "text-rose-600");
        assert_eq!(trend_text(ChangeTrend::Neutral), "text-slate-500");
    }

    #[test]
    fn urgency_badges_escalate_with_priority() {
        assert!(urgency_badge(Urgency::High).contains("rose"));
        assert!(urgency_badge(Urgency::Medium).contains("amber"));
        assert!(urgency_badge(Urgency::Low).contains("emerald"));
    }
}
