//! Command implementations

pub mod audit;
pub mod show;
pub mod simple;

pub use audit::{AuditReport, audit_boards, print_audit_report, run_audit};
pub use show::run_show;
pub use simple::{CommandError, TextCommand, run_simple};
