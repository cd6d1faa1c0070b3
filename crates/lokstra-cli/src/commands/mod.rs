//! Command handlers.  Each submodule exposes a single `execute` function.

pub mod completions;
pub mod init;
pub mod lint;
