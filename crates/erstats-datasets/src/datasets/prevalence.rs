//! Prevalence figures for the Philippines and worldwide (2024).

use std::sync::LazyLock;

use erstats_core::snapshot::Snapshot;
use erstats_core::table::{Cell, Record, Table};
use serde::{Deserialize, Serialize};

use crate::Dataset;

pub fn philippines_snapshot() -> &'static Snapshot {
    static SNAPSHOT: LazyLock<Snapshot> = LazyLock::new(|| {
        Snapshot::new(
            "philippines_2024",
            "🇵🇭 Philippines ER+ Statistics (2024)",
            &[
                ("Total ER+ Cases (2024)", "14,200"),
                ("New Cases (Monthly)", "1,183"),
                ("ER+ Percentage", "68%"),
                ("5-Year Survival Rate", "78%"),
                ("Early Detection Rate", "42%"),
                ("Treatment Access", "65%"),
            ],
        )
    });
    &SNAPSHOT
}

pub fn global_snapshot() -> &'static Snapshot {
    static SNAPSHOT: LazyLock<Snapshot> = LazyLock::new(|| {
        Snapshot::new(
            "global_2024",
            "🌍 Worldwide ER+ Statistics (2024)",
            &[
                ("Global ER+ Cases", "1.4M"),
                ("Annual Growth Rate", "+2.3%"),
                ("ER+ Percentage (Global)", "70%"),
                ("5-Year Survival (Developed)", "89%"),
                ("5-Year Survival (Developing)", "65%"),
                ("Research Investment", "$2.8B"),
            ],
        )
    });
    &SNAPSHOT
}

/// The three sidebar figures.
pub fn quick_stats() -> &'static Snapshot {
    static SNAPSHOT: LazyLock<Snapshot> = LazyLock::new(|| {
        Snapshot::new(
            "quick_stats",
            "📈 Quick Stats",
            &[
                ("PH ER+ Cases (2024)", "14,200"),
                ("Global ER+ Rate", "70%"),
                ("5-Year Survival", "78%"),
            ],
        )
    });
    &SNAPSHOT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionCases {
    pub region: String,
    pub cases: u32,
    pub treatment_centers: u32,
}

impl Record for RegionCases {
    const COLUMNS: &'static [&'static str] = &["Region", "ER+ Cases", "Treatment Centers"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.region),
            self.cases.into(),
            self.treatment_centers.into(),
        ]
    }
}

pub fn regional_distribution() -> &'static [RegionCases] {
    static ROWS: LazyLock<Vec<RegionCases>> = LazyLock::new(|| {
        [
            ("NCR", 3420, 45),
            ("CALABARZON", 2180, 28),
            ("Central Luzon", 1650, 22),
            ("Central Visayas", 1320, 18),
            ("Northern Mindanao", 980, 12),
            ("Others", 4650, 35),
        ]
        .into_iter()
        .map(|(region, cases, treatment_centers)| RegionCases {
            region: region.to_string(),
            cases,
            treatment_centers,
        })
        .collect()
    });
    &ROWS
}

pub struct RegionalDistribution;

impl Dataset for RegionalDistribution {
    fn id(&self) -> &str {
        "regional_distribution"
    }

    fn title(&self) -> &str {
        "Regional Distribution"
    }

    fn table(&self) -> Table {
        Table::from_records(self.id(), regional_distribution())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryOutcome {
    pub country: String,
    pub survival_rate: u32,
    pub treatment_access: u32,
    /// Bubble size for the comparison scatter. Not a reported statistic.
    pub marker_weight: u32,
}

impl Record for CountryOutcome {
    const COLUMNS: &'static [&'static str] =
        &["Country", "ER+ Survival Rate", "Treatment Access", "Marker Weight"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.country),
            self.survival_rate.into(),
            self.treatment_access.into(),
            self.marker_weight.into(),
        ]
    }
}

pub fn country_comparison() -> &'static [CountryOutcome] {
    static ROWS: LazyLock<Vec<CountryOutcome>> = LazyLock::new(|| {
        [
            ("USA", 91, 95, 100),
            ("Japan", 87, 92, 80),
            ("Germany", 86, 94, 85),
            ("Philippines", 78, 65, 60),
            ("India", 66, 45, 120),
            ("Brazil", 71, 68, 95),
        ]
        .into_iter()
        .map(
            |(country, survival_rate, treatment_access, marker_weight)| CountryOutcome {
                country: country.to_string(),
                survival_rate,
                treatment_access,
                marker_weight,
            },
        )
        .collect()
    });
    &ROWS
}

pub struct CountryComparison;

impl Dataset for CountryComparison {
    fn id(&self) -> &str {
        "country_comparison"
    }

    fn title(&self) -> &str {
        "Country Comparison"
    }

    fn table(&self) -> Table {
        Table::from_records(self.id(), country_comparison())
    }
}
