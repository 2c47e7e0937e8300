//! Command handlers grouped by sub-command.

pub(crate) mod check;
pub(crate) mod history;
pub(crate) mod monitor;
pub(crate) mod start;
pub(crate) mod vuln;
