//! erstats-core
//!
//! Pure presentation vocabulary: the widget tree, chart descriptions and the
//! record-set schema check. No templating or I/O, this is what the dataset,
//! dashboard and export crates share.

pub mod chart;
pub mod snapshot;
pub mod table;
pub mod widget;
