//! erstats-dashboard
//!
//! The report renderer. Builds the five-tab ER+ statistics dashboard, plus the
//! sidebar summary, as a widget tree. Every section is a pure function of the
//! literal datasets, the host's interaction state and the render clock.

pub mod host;
pub mod lookup;
pub mod sections;
pub mod sidebar;

use erstats_core::widget::{Dashboard, Tab, TabSet, Widget};
use jiff::Timestamp;
use tracing::{debug, warn};

pub use host::HostState;
use sections::{RenderContext, all_sections};
pub use sidebar::quick_stats;

pub const PAGE_TITLE: &str = "ER+ Statistics";
pub const DASHBOARD_HEADER: &str = "📊 Live ER+ Breast Cancer Statistics";
pub const DASHBOARD_CAPTION: &str =
    "Real-time data on ER+ breast cancer prevalence, treatments, and healthcare facilities";

/// Render the full dashboard for the given host state at `now`.
///
/// `now` only feeds the "last updated" banner; everything else comes from
/// literals, so two renders with the same inputs are identical.
pub fn render_dashboard(state: &HostState, now: Timestamp) -> Dashboard {
    let ctx = RenderContext::new(state, now);
    let sections = all_sections();

    let active_tab = if state.active_tab < sections.len() {
        state.active_tab
    } else {
        warn!(
            requested = state.active_tab,
            available = sections.len(),
            "active tab out of range, showing the first tab"
        );
        0
    };

    let tabs = sections
        .iter()
        .enumerate()
        .map(|(idx, section)| {
            let body = section.render(&ctx);
            debug!(section = section.id(), widgets = body.len(), "section rendered");
            Tab {
                title: section.title().to_string(),
                active: idx == active_tab,
                body,
            }
        })
        .collect();

    Dashboard {
        page_title: PAGE_TITLE.to_string(),
        body: vec![
            Widget::header(DASHBOARD_HEADER),
            Widget::caption(DASHBOARD_CAPTION),
            Widget::Tabs(TabSet {
                id: "stat-tabs".to_string(),
                tabs,
            }),
        ],
        sidebar: sidebar::sidebar(),
    }
}

/// [`render_dashboard`] against the wall clock.
pub fn render_dashboard_now(state: &HostState) -> Dashboard {
    render_dashboard(state, Timestamp::now())
}
