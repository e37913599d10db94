//! CLI library components for tablesort.

pub mod logging;
pub mod render;
pub mod report;
pub mod table;
