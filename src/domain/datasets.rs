//! The fixed indicator datasets behind every panel. Values are editorial
//! placeholders until a data feed lands; pages treat them as read-only and
//! rebuild them per render.

use crate::domain::{
    ChangeTrend, ClimateReading, ConditionAlert, FarmingRecommendation, IconKind, Metric,
    RegionalImpact, RiskLevel, Severity, Urgency,
};

/// Headline indicators on the landing page, one per SDG focus area.
pub fn global_metrics() -> Vec<Metric> {
    vec![
        Metric {
            title: "Global Temperature",
            value: "+1.2°C",
            change: "+0.1°C from last year",
            trend: ChangeTrend::Negative,
            icon: IconKind::Thermometer,
        },
        Metric {
            title: "Clean Water Access",
            value: "74%",
            change: "+2% improvement",
            trend: ChangeTrend::Positive,
            icon: IconKind::Droplets,
        },
        Metric {
            title: "Food Security Index",
            value: "68.5",
            change: "-1.2 points",
            trend: ChangeTrend::Negative,
            icon: IconKind::Wheat,
        },
        Metric {
            title: "Health Coverage",
            value: "81%",
            change: "+3% improvement",
            trend: ChangeTrend::Positive,
            icon: IconKind::Heart,
        },
    ]
}

/// Snapshot indicators at the top of the climate detail page.
pub fn climate_metrics() -> Vec<Metric> {
    vec![
        Metric {
            title: "Current Temperature",
            value: "15.1°C",
            change: "+1.2°C above pre-industrial",
            trend: ChangeTrend::Negative,
            icon: IconKind::Thermometer,
        },
        Metric {
            title: "Precipitation Level",
            value: "12.1mm",
            change: "-5.6% from average",
            trend: ChangeTrend::Negative,
            icon: IconKind::CloudRain,
        },
        Metric {
            title: "Wind Patterns",
            value: "Moderate",
            change: "Stable conditions",
            trend: ChangeTrend::Positive,
            icon: IconKind::Wind,
        },
        Metric {
            title: "Solar Radiation",
            value: "High",
            change: "+8% from seasonal avg",
            trend: ChangeTrend::Neutral,
            icon: IconKind::Sun,
        },
    ]
}

/// Mean surface temperature by year, in °C.
pub fn temperature_trend() -> Vec<ClimateReading> {
    vec![
        ClimateReading { year: 2019, value: 14.7, change: "+0.8°C" },
        ClimateReading { year: 2020, value: 14.9, change: "+1.0°C" },
        ClimateReading { year: 2021, value: 14.8, change: "+0.9°C" },
        ClimateReading { year: 2022, value: 15.0, change: "+1.1°C" },
        ClimateReading { year: 2023, value: 15.2, change: "+1.3°C" },
        ClimateReading { year: 2024, value: 15.1, change: "+1.2°C" },
    ]
}

/// Mean precipitation by year, in mm.
pub fn precipitation_trend() -> Vec<ClimateReading> {
    vec![
        ClimateReading { year: 2019, value: 12.5, change: "-2.1%" },
        ClimateReading { year: 2020, value: 13.2, change: "+3.4%" },
        ClimateReading { year: 2021, value: 11.8, change: "-7.8%" },
        ClimateReading { year: 2022, value: 12.9, change: "+0.8%" },
        ClimateReading { year: 2023, value: 11.5, change: "-10.2%" },
        ClimateReading { year: 2024, value: 12.1, change: "-5.6%" },
    ]
}

/// Live alert rows on the current-conditions tab.
pub fn condition_alerts() -> Vec<ConditionAlert> {
    vec![
        ConditionAlert {
            title: "Heat Wave Alert",
            detail: "Temperatures 5°C above average",
            status: "Active",
            severity: Severity::Critical,
            icon: IconKind::AlertTriangle,
        },
        ConditionAlert {
            title: "Air Quality",
            detail: "Within acceptable limits",
            status: "Good",
            severity: Severity::Healthy,
            icon: IconKind::CheckCircle,
        },
        ConditionAlert {
            title: "UV Index",
            detail: "High exposure levels",
            status: "8/10",
            severity: Severity::Watch,
            icon: IconKind::Sun,
        },
    ]
}

/// Regional assessment cards on the current-conditions tab.
pub fn regional_impacts() -> Vec<RegionalImpact> {
    vec![
        RegionalImpact {
            region: "Arctic Region",
            summary: "Ice coverage decreased by 12% this year",
            risk: RiskLevel::Critical,
        },
        RegionalImpact {
            region: "Amazon Rainforest",
            summary: "Deforestation rate at 15% above target",
            risk: RiskLevel::High,
        },
        RegionalImpact {
            region: "Sahel Region",
            summary: "Drought conditions improving",
            risk: RiskLevel::Moderate,
        },
    ]
}

/// Advisory entries on the smart-farming tab, in editorial order.
pub fn farming_recommendations() -> Vec<FarmingRecommendation> {
    vec![
        FarmingRecommendation {
            crop: "Wheat",
            advice: "Plant drought-resistant varieties",
            urgency: Urgency::High,
            region: "Midwest USA",
        },
        FarmingRecommendation {
            crop: "Rice",
            advice: "Implement water-saving irrigation",
            urgency: Urgency::Medium,
            region: "Southeast Asia",
        },
        FarmingRecommendation {
            crop: "Corn",
            advice: "Adjust planting schedule by 2 weeks",
            urgency: Urgency::High,
            region: "Brazil",
        },
        FarmingRecommendation {
            crop: "Tomatoes",
            advice: "Use greenhouse cultivation",
            urgency: Urgency::Low,
            region: "Mediterranean",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_years_ascend(series: &[ClimateReading]) {
        let years: Vec<u16> = series.iter().map(|reading| reading.year).collect();
        assert_eq!(years, vec![2019, 2020, 2021, 2022, 2023, 2024]);
    }

    #[test]
    fn temperature_series_covers_six_ascending_years() {
        let series = temperature_trend();
        assert_eq!(series.len(), 6);
        assert_years_ascend(&series);
    }

    #[test]
    fn precipitation_series_covers_six_ascending_years() {
        let series = precipitation_trend();
        assert_eq!(series.len(), 6);
        assert_years_ascend(&series);
    }

    #[test]
    fn temperature_2023_renders_its_literal_row() {
        let reading = temperature_trend()
            .into_iter()
            .find(|reading| reading.year == 2023)
            .unwrap();
        assert_eq!(format!("{}°C", reading.value), "15.2°C");
        assert_eq!(reading.change, "+1.3°C");
    }

    #[test]
    fn whole_valued_readings_render_without_a_trailing_zero() {
        let reading = temperature_trend()
            .into_iter()
            .find(|reading| reading.year == 2022)
            .unwrap();
        assert_eq!(format!("{}°C", reading.value), "15°C");
    }

    #[test]
    fn farming_recommendations_keep_editorial_order() {
        let recs = farming_recommendations();
        assert_eq!(recs.len(), 4);
        let crops: Vec<&str> = recs.iter().map(|rec| rec.crop).collect();
        assert_eq!(crops, vec!["Wheat", "Rice", "Corn", "Tomatoes"]);
        assert_eq!(recs[0].urgency, Urgency::High);
        assert_eq!(recs[1].urgency, Urgency::Medium);
        assert_eq!(recs[3].urgency, Urgency::Low);
        assert_eq!(recs[3].region, "Mediterranean");
    }

    #[test]
    fn metric_grids_hold_four_cards_each() {
        assert_eq!(global_metrics().len(), 4);
        assert_eq!(climate_metrics().len(), 4);
    }

    #[test]
    fn current_conditions_hold_three_rows_each() {
        assert_eq!(condition_alerts().len(), 3);
        assert_eq!(regional_impacts().len(), 3);
    }
}
