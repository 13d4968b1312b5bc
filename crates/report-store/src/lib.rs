//! Persistent storage for daily reports.
//!
//! Two paths, both JSON encodings of the same [`report_model::ReportRecord`]
//! schema:
//! - the **slot**: one fixed file holding the latest saved report, replaced
//!   wholesale on every save;
//! - **backup files**: standalone pretty-printed documents the user exports
//!   to and restores from explicitly.

pub mod backup;
pub mod error;
pub mod slot;

pub use backup::{backup_file_name, read_backup, write_backup};
pub use error::{Result, StoreError};
pub use slot::slot_path;
