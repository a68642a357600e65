/// Report rendering — console table and structured export formats.
pub mod export;
pub mod table;

pub use export::{render_csv, render_json, ExportError};
pub use table::render_report;
