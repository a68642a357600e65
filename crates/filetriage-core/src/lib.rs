/// FileTriage Core — classification, ordering, and distribution analysis.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (CLI, GUI, TUI).
///
/// # Modules
///
/// - [`model`] — Classified record, category enum, and format helpers.
/// - [`registry`] — Extension-to-category lookup table.
/// - [`classify`] — Extension extraction and per-filename classification.
/// - [`analysis`] — Priority ordering and distribution statistics.
pub mod analysis;
pub mod classify;
pub mod model;
pub mod registry;
