pub mod affordability;
pub mod global;
pub mod hospitals;
pub mod treatment;
pub mod trends;

use erstats_core::widget::Widget;
use jiff::Timestamp;
use jiff::tz::{self, TimeZone};

use crate::host::HostState;

/// Philippine Standard Time is a fixed UTC+08:00, no DST.
const PHT_OFFSET_HOURS: i8 = 8;

/// Everything a section may read while rendering.
pub struct RenderContext<'a> {
    pub state: &'a HostState,
    /// Preformatted "last updated" stamp, e.g. `2024-06-01 09:30 PHT`.
    pub updated_at: String,
}

impl<'a> RenderContext<'a> {
    pub fn new(state: &'a HostState, now: Timestamp) -> Self {
        Self {
            state,
            updated_at: format_pht(now),
        }
    }
}

/// Format a timestamp as Philippine wall-clock minutes.
pub fn format_pht(now: Timestamp) -> String {
    let zoned = now.to_zoned(TimeZone::fixed(tz::offset(PHT_OFFSET_HOURS)));
    format!("{} PHT", zoned.strftime("%Y-%m-%d %H:%M"))
}

/// Trait implemented by each top-level dashboard tab.
pub trait Section: Send + Sync {
    /// Stable identifier (e.g. "hospitals").
    fn id(&self) -> &str;

    /// Tab title as shown to the user.
    fn title(&self) -> &str;

    /// Build the tab body. Never empty.
    fn render(&self, ctx: &RenderContext<'_>) -> Vec<Widget>;
}

/// All sections in tab order.
pub fn all_sections() -> Vec<Box<dyn Section>> {
    vec![
        Box::new(global::GlobalComparison),
        Box::new(treatment::TreatmentEffectiveness),
        Box::new(hospitals::BestHospitals),
        Box::new(affordability::AffordableOptions),
        Box::new(trends::TrendsAnalysis),
    ]
}

pub fn get_section(id: &str) -> Option<Box<dyn Section>> {
    all_sections().into_iter().find(|s| s.id() == id)
}
