//! Built-in sample data loaded into freshly created page sessions.
//!
//! Seeds are configuration, not user input: they bypass draft parsing and go
//! straight into the stores as already-valid records.

use chrono::NaiveDate;
use contracts::dashboards::d400_overview::{TREND_SCOPE1, TREND_SCOPE2, TREND_SCOPE3};
use contracts::domain::a001_emission_record::{EmissionFields, EmissionRecord};
use contracts::domain::a002_energy_record::{EnergyFields, EnergyRecord};
use contracts::domain::a003_value_chain_record::{ValueChainFields, ValueChainRecord};
use contracts::domain::a004_waste_record::{WasteFields, WasteRecord};
use contracts::domain::a005_idea::{Idea, IdeaFields};
use contracts::enums::{
    Department, DisposalMethod, EmissionType, EnergyType, IdeaCategory, IdeaPriority, IdeaStatus,
    ReductionStatus, ValueChainCategory, WasteType,
};
use contracts::projections::p902_energy_mix::{
    ENERGY_CONVENTIONAL, ENERGY_RENEWABLE, ENERGY_TOTAL,
};
use contracts::projections::p904_waste_recycling::{
    WASTE_COMPOSTED, WASTE_ENERGY, WASTE_LANDFILL, WASTE_RECYCLED,
};
use contracts::shared::charts::TrendPoint;
use once_cell::sync::Lazy;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Seed dates are literals and always in range
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

// ============================================================================
// Scope 1
// ============================================================================

pub fn emission_records() -> Vec<EmissionRecord> {
    vec![
        EmissionRecord::new_for_insert(
            date(2024, 1, 15),
            EmissionFields {
                source: "사무용 차량".to_string(),
                emission_type: EmissionType::FuelCombustion,
                amount: 45.2,
                unit: "tCO2e".to_string(),
                location: "본사".to_string(),
            },
        ),
        EmissionRecord::new_for_insert(
            date(2024, 1, 14),
            EmissionFields {
                source: "보일러".to_string(),
                emission_type: EmissionType::FuelCombustion,
                amount: 120.5,
                unit: "tCO2e".to_string(),
                location: "본사".to_string(),
            },
        ),
        EmissionRecord::new_for_insert(
            date(2024, 1, 13),
            EmissionFields {
                source: "발전기".to_string(),
                emission_type: EmissionType::FuelCombustion,
                amount: 78.3,
                unit: "tCO2e".to_string(),
                location: "지점".to_string(),
            },
        ),
    ]
}

// ============================================================================
// Scope 2
// ============================================================================

pub fn energy_records() -> Vec<EnergyRecord> {
    vec![
        EnergyRecord::new_for_insert(
            date(2024, 1, 15),
            EnergyFields {
                energy_type: EnergyType::Electricity,
                source: "한국전력공사".to_string(),
                amount: 15000.0,
                unit: "kWh".to_string(),
                location: "본사".to_string(),
                renewable: false,
            },
        ),
        EnergyRecord::new_for_insert(
            date(2024, 1, 15),
            EnergyFields {
                energy_type: EnergyType::Electricity,
                source: "재생에너지".to_string(),
                amount: 5000.0,
                unit: "kWh".to_string(),
                location: "본사".to_string(),
                renewable: true,
            },
        ),
        EnergyRecord::new_for_insert(
            date(2024, 1, 14),
            EnergyFields {
                energy_type: EnergyType::HeatingCooling,
                source: "지역난방공사".to_string(),
                amount: 2500.0,
                unit: "GJ".to_string(),
                location: "본사".to_string(),
                renewable: false,
            },
        ),
    ]
}

// ============================================================================
// Scope 3
// ============================================================================

pub fn value_chain_records() -> Vec<ValueChainRecord> {
    vec![
        ValueChainRecord::new_for_insert(
            date(2024, 1, 15),
            ValueChainFields {
                category: ValueChainCategory::PurchasedGoods,
                activity: "IT 장비 구매".to_string(),
                amount: 450.2,
                unit: "tCO2e".to_string(),
                supplier: "삼성전자".to_string(),
                status: ReductionStatus::Active,
            },
        ),
        ValueChainRecord::new_for_insert(
            date(2024, 1, 14),
            ValueChainFields {
                category: ValueChainCategory::Transport,
                activity: "화물 운송".to_string(),
                amount: 320.5,
                unit: "tCO2e".to_string(),
                supplier: "한국통운".to_string(),
                status: ReductionStatus::Reduced,
            },
        ),
        ValueChainRecord::new_for_insert(
            date(2024, 1, 13),
            ValueChainFields {
                category: ValueChainCategory::BusinessTravel,
                activity: "항공 여행".to_string(),
                amount: 180.3,
                unit: "tCO2e".to_string(),
                supplier: "대한항공".to_string(),
                status: ReductionStatus::Active,
            },
        ),
        ValueChainRecord::new_for_insert(
            date(2024, 1, 12),
            ValueChainFields {
                category: ValueChainCategory::WasteTreatment,
                activity: "폐기물 처리".to_string(),
                amount: 95.8,
                unit: "tCO2e".to_string(),
                supplier: "환경처리업체".to_string(),
                status: ReductionStatus::Reduced,
            },
        ),
    ]
}

// ============================================================================
// Circular economy
// ============================================================================

pub fn waste_records() -> Vec<WasteRecord> {
    vec![
        WasteRecord::new_for_insert(
            date(2024, 1, 15),
            WasteFields {
                waste_type: WasteType::Paper,
                amount: 2500.0,
                unit: "kg".to_string(),
                disposal: DisposalMethod::Recycling,
                recycling_rate: 95.0,
                location: "본사".to_string(),
            },
        ),
        WasteRecord::new_for_insert(
            date(2024, 1, 14),
            WasteFields {
                waste_type: WasteType::Plastic,
                amount: 800.0,
                unit: "kg".to_string(),
                disposal: DisposalMethod::Recycling,
                recycling_rate: 85.0,
                location: "본사".to_string(),
            },
        ),
        WasteRecord::new_for_insert(
            date(2024, 1, 13),
            WasteFields {
                waste_type: WasteType::EWaste,
                amount: 120.0,
                unit: "kg".to_string(),
                disposal: DisposalMethod::Recycling,
                recycling_rate: 90.0,
                location: "본사".to_string(),
            },
        ),
        WasteRecord::new_for_insert(
            date(2024, 1, 12),
            WasteFields {
                waste_type: WasteType::FoodWaste,
                amount: 600.0,
                unit: "kg".to_string(),
                disposal: DisposalMethod::Composting,
                recycling_rate: 100.0,
                location: "본사".to_string(),
            },
        ),
    ]
}

// ============================================================================
// Ideas
// ============================================================================

/// Sample idea with the full field set the submit flow never produces
/// (named authors, review statuses, engagement counters).
#[allow(clippy::too_many_arguments)]
fn seeded_idea(
    submitted: NaiveDate,
    fields: IdeaFields,
    author: &str,
    status: IdeaStatus,
    impact: u8,
    feasibility: u8,
    likes: u32,
    comments: u32,
    implementation_date: Option<NaiveDate>,
) -> Idea {
    let mut idea = Idea::new_for_insert(submitted, fields);
    idea.author = author.to_string();
    idea.status = status;
    idea.impact = impact;
    idea.feasibility = feasibility;
    idea.likes = likes;
    idea.comments = comments;
    idea.implementation_date = implementation_date;
    idea
}

pub fn ideas() -> Vec<Idea> {
    vec![
        seeded_idea(
            date(2024, 1, 10),
            IdeaFields {
                title: "사무용 전기차 충전소 확대".to_string(),
                description: "사무실 주차장에 전기차 충전소를 추가로 설치하여 직원들의 \
                              전기차 사용을 촉진하고 Scope 1 배출량을 감소시킬 수 있습니다."
                    .to_string(),
                category: IdeaCategory::Scope1,
                department: Department::ItDevelopment,
                priority: IdeaPriority::High,
            },
            "김철수",
            IdeaStatus::Implemented,
            4,
            5,
            15,
            8,
            Some(date(2024, 1, 20)),
        ),
        seeded_idea(
            date(2024, 1, 12),
            IdeaFields {
                title: "스마트 조명 시스템 도입".to_string(),
                description: "IoT 센서를 활용한 자동 조명 시스템으로 전력 사용량을 30% \
                              절약할 수 있습니다."
                    .to_string(),
                category: IdeaCategory::Scope2,
                department: Department::Facilities,
                priority: IdeaPriority::Medium,
            },
            "이영희",
            IdeaStatus::Approved,
            3,
            4,
            12,
            5,
            None,
        ),
        seeded_idea(
            date(2024, 1, 15),
            IdeaFields {
                title: "공급업체 친환경 인증 제도".to_string(),
                description: "공급업체에 친환경 인증을 요구하여 Scope 3 배출량을 감소시킬 \
                              수 있습니다."
                    .to_string(),
                category: IdeaCategory::Scope3,
                department: Department::Procurement,
                priority: IdeaPriority::High,
            },
            "박민수",
            IdeaStatus::Reviewing,
            5,
            3,
            18,
            12,
            None,
        ),
        seeded_idea(
            date(2024, 1, 18),
            IdeaFields {
                title: "폐기물 업사이클링 프로그램".to_string(),
                description: "사무용품을 업사이클링하여 새로운 제품으로 재생산하는 \
                              프로그램을 제안합니다."
                    .to_string(),
                category: IdeaCategory::CircularEconomy,
                department: Department::Environment,
                priority: IdeaPriority::Medium,
            },
            "정수진",
            IdeaStatus::Submitted,
            4,
            4,
            9,
            3,
            None,
        ),
    ]
}

// ============================================================================
// Fixed history series
// ============================================================================

/// Monthly greenhouse-gas emission history shown on the overview trend chart.
///
/// Reported figures from the last closed reporting period; live stores only
/// cover the current month, so this series is a constant.
pub static MONTHLY_EMISSION_TREND: Lazy<Vec<TrendPoint>> = Lazy::new(|| {
    let months: [(&str, f64, f64, f64); 6] = [
        ("1월", 1200.0, 800.0, 2000.0),
        ("2월", 1100.0, 750.0, 1900.0),
        ("3월", 1000.0, 700.0, 1800.0),
        ("4월", 950.0, 680.0, 1750.0),
        ("5월", 900.0, 650.0, 1700.0),
        ("6월", 850.0, 620.0, 1650.0),
    ];
    months
        .into_iter()
        .map(|(name, scope1, scope2, scope3)| {
            TrendPoint::new(
                name,
                vec![
                    (TREND_SCOPE1.to_string(), scope1),
                    (TREND_SCOPE2.to_string(), scope2),
                    (TREND_SCOPE3.to_string(), scope3),
                ],
            )
        })
        .collect()
});

/// Monthly purchased-energy history (total / renewable / conventional in kWh)
pub static MONTHLY_ENERGY_TREND: Lazy<Vec<TrendPoint>> = Lazy::new(|| {
    let months: [(&str, f64, f64, f64); 6] = [
        ("1월", 22000.0, 5000.0, 17000.0),
        ("2월", 21000.0, 4800.0, 16200.0),
        ("3월", 20000.0, 5200.0, 14800.0),
        ("4월", 19500.0, 5500.0, 14000.0),
        ("5월", 19000.0, 6000.0, 13000.0),
        ("6월", 18500.0, 6500.0, 12000.0),
    ];
    months
        .into_iter()
        .map(|(name, total, renewable, conventional)| {
            TrendPoint::new(
                name,
                vec![
                    (ENERGY_TOTAL.to_string(), total),
                    (ENERGY_RENEWABLE.to_string(), renewable),
                    (ENERGY_CONVENTIONAL.to_string(), conventional),
                ],
            )
        })
        .collect()
});

/// Monthly waste-disposal history, one series per disposal method (kg)
pub static MONTHLY_WASTE_TREND: Lazy<Vec<TrendPoint>> = Lazy::new(|| {
    let months: [(&str, f64, f64, f64, f64); 6] = [
        ("1월", 3200.0, 550.0, 180.0, 0.0),
        ("2월", 3100.0, 520.0, 170.0, 0.0),
        ("3월", 3300.0, 580.0, 190.0, 0.0),
        ("4월", 3400.0, 600.0, 200.0, 0.0),
        ("5월", 3500.0, 620.0, 210.0, 0.0),
        ("6월", 3600.0, 650.0, 220.0, 0.0),
    ];
    months
        .into_iter()
        .map(|(name, recycled, composted, energy, landfill)| {
            TrendPoint::new(
                name,
                vec![
                    (WASTE_RECYCLED.to_string(), recycled),
                    (WASTE_COMPOSTED.to_string(), composted),
                    (WASTE_ENERGY.to_string(), energy),
                    (WASTE_LANDFILL.to_string(), landfill),
                ],
            )
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_seed_totals() {
        let records = emission_records();
        assert_eq!(records.len(), 3);
        let total: f64 = records.iter().map(|r| r.amount).sum();
        assert!((total - 244.0).abs() < 1e-9);
    }

    #[test]
    fn test_energy_seed_has_one_renewable() {
        let records = energy_records();
        assert_eq!(records.iter().filter(|r| r.renewable).count(), 1);
    }

    #[test]
    fn test_idea_seed_statuses() {
        let seeds = ideas();
        assert_eq!(seeds.len(), 4);
        assert_eq!(seeds[0].status, IdeaStatus::Implemented);
        assert!(seeds[0].implementation_date.is_some());
        assert!(seeds[3].implementation_date.is_none());
    }

    #[test]
    fn test_seed_records_pass_validation() {
        assert!(emission_records().iter().all(|r| r.validate().is_ok()));
        assert!(energy_records().iter().all(|r| r.validate().is_ok()));
        assert!(value_chain_records().iter().all(|r| r.validate().is_ok()));
        assert!(waste_records().iter().all(|r| r.validate().is_ok()));
        assert!(ideas().iter().all(|i| i.validate().is_ok()));
    }

    #[test]
    fn test_monthly_trend_covers_six_months() {
        assert_eq!(MONTHLY_EMISSION_TREND.len(), 6);
        let june = &MONTHLY_EMISSION_TREND[5];
        assert_eq!(june.series(TREND_SCOPE1), Some(850.0));
        assert_eq!(june.series(TREND_SCOPE3), Some(1650.0));
    }
}
