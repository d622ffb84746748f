//! Pipelines behind the dotruler commands
//!
//! `ruler-core` ties the lower crates together:
//!
//! ```text
//!                 ruler-cli
//!                     |
//!                 ruler-core
//!                     |
//!     +---------+-----+------+-----------+
//!     |         |            |           |
//! ruler-fs  ruler-meta  ruler-tools  ruler-scan
//! ```
//!
//! - [`validation`]: findings for a loaded configuration
//! - [`generate`]: render and write every enabled target
//! - [`diff`]: render without writing and compare with disk
//! - [`init`]: scan a project and write a starter configuration

pub mod diff;
pub mod error;
pub mod generate;
pub mod init;
pub mod validation;

pub use diff::{DiffReport, DiffStatus, TargetDiff, diff_targets, unified_diff};
pub use error::{Error, Result};
pub use generate::{GenerateAction, GenerateEntry, GenerateOptions, GenerateReport, generate_targets};
pub use init::{InitReport, init_project, starter_config};
pub use validation::{Finding, Severity, ValidationReport, validate_config};
