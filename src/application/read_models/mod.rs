//! Read models
//!
//! View-optimized, denormalized representations of domain data for output.

pub mod report_row;

pub use report_row::ReportRow;
