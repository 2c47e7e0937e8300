//! `monitor` sub-command: runtime monitoring of a container.

use crate::cli::MonitorArgs;
use crate::client::{AppContext, CliError, CliResult};
use crate::output::print_json;

/// Monitoring action resolved from the option flags. `--start` takes
/// precedence when both are given, matching the dispatch priority of the
/// other sub-commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MonitorAction {
    Start,
    Stop,
}

impl MonitorAction {
    pub(crate) fn from_args(args: &MonitorArgs) -> CliResult<Self> {
        if args.start {
            return Ok(Self::Start);
        }
        if args.stop {
            return Ok(Self::Stop);
        }
        Err(CliError::validation(
            "one of --start or --stop is required",
        ))
    }

    const fn path_segment(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}

pub(crate) async fn handle_monitor(ctx: &AppContext, args: MonitorArgs) -> CliResult<()> {
    let action = MonitorAction::from_args(&args)?;
    let MonitorArgs { container_id, .. } = args;
    let body = ctx
        .post(&format!(
            "/monitor/containers/{container_id}/{}",
            action.path_segment()
        ))
        .await?;
    print_json(&body)
}
