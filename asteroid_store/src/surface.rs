//! Rendering surface contract
//!
//! The core never draws anything. A UI layer implements this trait and the
//! caller pushes tables, metrics and messages into it; all payload types
//! are serializable so a browser-facing layer can forward them as JSON.

use crate::table::ResultTable;

/// Output half of the dashboard surface
pub trait RenderSurface {
    /// Display a tabular result
    fn show_table(&mut self, table: &ResultTable);

    /// Display a single summary metric
    fn show_metric(&mut self, label: &str, value: u64);

    /// Display a warning, e.g. for an unrecognized question
    fn show_warning(&mut self, message: &str);

    /// Display an informational message
    fn show_info(&mut self, message: &str);
}
