use crate::projections::{p904_waste_recycling, p905_idea_engagement};
use crate::shared::config::Config;
use crate::shared::data::seed::MONTHLY_EMISSION_TREND;
use crate::shared::format::{format_count, format_percent};
use contracts::dashboards::d400_overview::{
    OverviewResponse, TREND_SCOPE1, TREND_SCOPE2, TREND_SCOPE3,
};
use contracts::domain::a004_waste_record::WasteRecord;
use contracts::domain::a005_idea::Idea;
use contracts::shared::charts::ChartPoint;
use contracts::shared::indicators::{IndicatorId, IndicatorStatus, IndicatorValue, ValueFormat};

/// Assemble the main dashboard page.
///
/// The emission trend and its scope split come from the fixed reporting
/// history; the circular-economy and idea cards are live.
pub fn get_overview(waste: &[WasteRecord], ideas: &[Idea], config: &Config) -> OverviewResponse {
    OverviewResponse {
        monthly_trend: MONTHLY_EMISSION_TREND.clone(),
        scope_share: scope_share(),
        circular_indicators: circular_indicators(waste, config),
        key_figures: key_figures(waste, ideas, config),
    }
}

/// Scope split of the latest reported month
fn scope_share() -> Vec<ChartPoint> {
    let latest = match MONTHLY_EMISSION_TREND.last() {
        Some(point) => point,
        None => return Vec::new(),
    };
    [
        ("Scope 1", TREND_SCOPE1),
        ("Scope 2", TREND_SCOPE2),
        ("Scope 3", TREND_SCOPE3),
    ]
    .into_iter()
    .map(|(label, key)| ChartPoint::new(label, latest.series(key).unwrap_or(0.0)))
    .collect()
}

fn percent_indicator(
    id: &str,
    label: &str,
    value: Option<f64>,
    target: f64,
    decimals: u8,
) -> IndicatorValue {
    let status = match value {
        Some(v) if v >= target => IndicatorStatus::Good,
        Some(_) => IndicatorStatus::Warning,
        None => IndicatorStatus::Neutral,
    };
    IndicatorValue {
        id: IndicatorId::new(id),
        label: label.to_string(),
        value,
        display: format_percent(value, decimals),
        unit: None,
        format: ValueFormat::Percent { decimals },
        status,
        target: Some(target),
    }
}

/// Circular-economy achievement cards, live figures against configured targets
fn circular_indicators(waste: &[WasteRecord], config: &Config) -> Vec<IndicatorValue> {
    let summary = p904_waste_recycling::service::summarize(waste);
    let landfill_zero = if summary.landfill_zero {
        100.0
    } else {
        config.current.landfill_zero_fallback
    };

    vec![
        percent_indicator(
            "recycling-rate",
            "재활용률",
            summary.recycling_rate,
            config.targets.recycling_rate,
            1,
        ),
        percent_indicator(
            "landfill-zero",
            "매립 제로화",
            Some(landfill_zero),
            config.targets.landfill_zero,
            0,
        ),
        percent_indicator(
            "resource-recovery",
            "자원 회수",
            Some(config.current.resource_recovery),
            config.targets.resource_recovery,
            0,
        ),
        percent_indicator(
            "energy-efficiency",
            "에너지 효율",
            Some(config.current.energy_efficiency),
            config.targets.energy_efficiency,
            0,
        ),
    ]
}

/// Headline figure cards
fn key_figures(waste: &[WasteRecord], ideas: &[Idea], config: &Config) -> Vec<IndicatorValue> {
    let recycling = p904_waste_recycling::service::summarize(waste).recycling_rate;
    let engagement = p905_idea_engagement::service::summarize(ideas);
    let yoy = config.current.yoy_emission_change;

    vec![
        IndicatorValue {
            id: IndicatorId::new("yoy-emission-change"),
            label: "전년 대비 배출량 감소".to_string(),
            value: Some(yoy),
            display: format!("{:.0}%", yoy),
            unit: None,
            format: ValueFormat::Percent { decimals: 0 },
            status: if yoy < 0.0 {
                IndicatorStatus::Good
            } else {
                IndicatorStatus::Bad
            },
            target: None,
        },
        IndicatorValue {
            id: IndicatorId::new("recycling-rate"),
            label: "재활용률".to_string(),
            value: recycling,
            display: format_percent(recycling, 0),
            unit: None,
            format: ValueFormat::Percent { decimals: 0 },
            status: IndicatorStatus::Good,
            target: None,
        },
        IndicatorValue {
            id: IndicatorId::new("total-ideas"),
            label: "제안된 아이디어".to_string(),
            value: Some(engagement.total_ideas as f64),
            display: format_count(engagement.total_ideas as u64),
            unit: Some("건".to_string()),
            format: ValueFormat::Integer,
            status: IndicatorStatus::Neutral,
            target: None,
        },
        IndicatorValue {
            id: IndicatorId::new("implemented-ideas"),
            label: "구현된 아이디어".to_string(),
            value: Some(engagement.implemented_ideas as f64),
            display: format_count(engagement.implemented_ideas as u64),
            unit: Some("건".to_string()),
            format: ValueFormat::Integer,
            status: IndicatorStatus::Good,
            target: None,
        },
    ]
}
