//! Command implementations for ruler-cli

pub mod diff;
pub mod generate;
pub mod init;
pub mod list;
pub mod validate;
pub mod version;

pub use diff::run_diff;
pub use generate::run_generate;
pub use init::run_init;
pub use list::run_list;
pub use validate::run_validate;
pub use version::run_version;
