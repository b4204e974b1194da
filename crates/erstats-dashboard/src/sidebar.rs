use erstats_core::widget::{ButtonAction, Widget};
use erstats_datasets::datasets::prevalence;

/// The three-metric summary for the persistent side panel.
///
/// Independent of the main dashboard's state.
pub fn quick_stats() -> Vec<Widget> {
    let snapshot = prevalence::quick_stats();
    let mut widgets = vec![Widget::heading(3, &snapshot.title)];
    widgets.extend(snapshot.widgets());
    widgets
}

pub(crate) fn sidebar() -> Vec<Widget> {
    let mut widgets = vec![
        Widget::Divider,
        Widget::Button {
            label: "📊 ER+ Statistics Dashboard".to_string(),
            action: ButtonAction::OpenDashboard,
        },
    ];
    widgets.extend(quick_stats());
    widgets
}
