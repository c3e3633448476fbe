use std::fmt;

use crate::domain::indicators::IconKind;

/// One year of a historical climate series. `change` is the pre-formatted
/// delta against the baseline, exactly as shown to the user.
#[derive(Clone, Debug, PartialEq)]
pub struct ClimateReading {
    pub year: u16,
    pub value: f64,
    pub change: &'static str,
}

impl ClimateReading {
    /// A leading minus sign on the formatted delta marks the year as a
    /// decline; everything else counts as a rise.
    pub fn is_decline(&self) -> bool {
        self.change.starts_with('-')
    }
}

/// Tab state for the climate detail page. Page-scoped; navigating away
/// resets it to `Historical`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClimateTab {
    #[default]
    Historical,
    Current,
    Farming,
}

impl ClimateTab {
    pub const ALL: [ClimateTab; 3] = [
        ClimateTab::Historical,
        ClimateTab::Current,
        ClimateTab::Farming,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ClimateTab::Historical => "Historical Data",
            ClimateTab::Current => "Current Conditions",
            ClimateTab::Farming => "Smart Farming",
        }
    }
}

/// Region filter options on the climate page. Selecting one updates local
/// state only; the displayed series do not react to it yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Region {
    #[default]
    Global,
    NorthAmerica,
    Europe,
    Asia,
    Africa,
    SouthAmerica,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::Global,
        Region::NorthAmerica,
        Region::Europe,
        Region::Asia,
        Region::Africa,
        Region::SouthAmerica,
        Region::Oceania,
    ];

    /// Stable identifier used as the `<option>` value attribute.
    pub fn id(&self) -> &'static str {
        match self {
            Region::Global => "global",
            Region::NorthAmerica => "north-america",
            Region::Europe => "europe",
            Region::Asia => "asia",
            Region::Africa => "africa",
            Region::SouthAmerica => "south-america",
            Region::Oceania => "oceania",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::Global => "Global",
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Africa => "Africa",
            Region::SouthAmerica => "South America",
            Region::Oceania => "Oceania",
        }
    }

    pub fn from_id(id: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|region| region.id() == id)
    }
}

/// Reporting window options on the climate page. Cosmetic for now, same as
/// [`Region`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeFrame {
    Monthly,
    #[default]
    Yearly,
    Decade,
    Century,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 4] = [
        TimeFrame::Monthly,
        TimeFrame::Yearly,
        TimeFrame::Decade,
        TimeFrame::Century,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TimeFrame::Monthly => "monthly",
            TimeFrame::Yearly => "yearly",
            TimeFrame::Decade => "decade",
            TimeFrame::Century => "century",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeFrame::Monthly => "Monthly",
            TimeFrame::Yearly => "Yearly",
            TimeFrame::Decade => "10 Years",
            TimeFrame::Century => "100 Years",
        }
    }

    pub fn from_id(id: &str) -> Option<TimeFrame> {
        TimeFrame::ALL.into_iter().find(|frame| frame.id() == id)
    }
}

/// How urgent a live condition alert is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Watch,
    Healthy,
}

/// A row in the real-time monitoring panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ConditionAlert {
    pub title: &'static str,
    pub detail: &'static str,
    pub status: &'static str,
    pub severity: Severity,
    pub icon: IconKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Critical,
    High,
    Moderate,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Critical => "Critical",
            RiskLevel::High => "High Risk",
            RiskLevel::Moderate => "Moderate",
        };
        f.write_str(label)
    }
}

/// A regional assessment card on the current-conditions tab.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionalImpact {
    pub region: &'static str,
    pub summary: &'static str,
    pub risk: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decline_is_read_from_the_formatted_delta() {
        let drier = ClimateReading {
            year: 2023,
            value: 11.5,
            change: "-10.2%",
        };
        let wetter = ClimateReading {
            year: 2020,
            value: 13.2,
            change: "+3.4%",
        };
        assert!(drier.is_decline());
        assert!(!wetter.is_decline());
    }

    #[test]
    fn region_ids_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_id(region.id()), Some(region));
        }
        assert_eq!(Region::from_id("atlantis"), None);
    }

    #[test]
    fn time_frame_ids_round_trip() {
        for frame in TimeFrame::ALL {
            assert_eq!(TimeFrame::from_id(frame.id()), Some(frame));
        }
        assert_eq!(TimeFrame::from_id(""), None);
    }

    #[test]
    fn selector_defaults_match_the_initial_page_state() {
        assert_eq!(Region::default(), Region::Global);
        assert_eq!(TimeFrame::default(), TimeFrame::Yearly);
        assert_eq!(ClimateTab::default(), ClimateTab::Historical);
    }

    #[test]
    fn risk_levels_display_their_card_labels() {
        assert_eq!(RiskLevel::Critical.to_string(), "Critical");
        assert_eq!(RiskLevel::High.to_string(), "High Risk");
        assert_eq!(RiskLevel::Moderate.to_string(), "Moderate");
    }
}
