//! `start` sub-command: local option validation and server bootstrap hand-off.

use std::env;
use std::process::Command;

use anyhow::anyhow;

use crate::cli::StartArgs;
use crate::client::{CliError, CliResult, PortFlag};

/// Environment variable overriding the server executable name.
pub(crate) const ENV_SERVER_BIN: &str = "DAGDA_SERVER_BIN";
const DEFAULT_SERVER_BIN: &str = "dagda-server";

const PORT_MIN: u32 = 1;
const PORT_MAX: u32 = 65_535;

/// Validate the locally-checkable start options, then hand off to the server
/// executable with the surviving flags. No HTTP request is issued.
pub(crate) fn handle_start(args: &StartArgs) -> CliResult<()> {
    validate(args)?;

    let binary = env::var(ENV_SERVER_BIN).unwrap_or_else(|_| DEFAULT_SERVER_BIN.to_string());
    let mut command = Command::new(&binary);
    if let Some(host) = &args.server_host {
        command.arg("--server_host").arg(host);
    }
    if let Some(port) = args.server_port {
        command.arg("--server_port").arg(port.to_string());
    }
    if let Some(host) = &args.mongodb_host {
        command.arg("--mongodb_host").arg(host);
    }
    if let Some(port) = args.mongodb_port {
        command.arg("--mongodb_port").arg(port.to_string());
    }

    tracing::debug!(binary = %binary, "handing off to server bootstrap");
    let status = command.status().map_err(|err| {
        CliError::failure(anyhow!("failed to launch server binary '{binary}': {err}"))
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(CliError::failure(anyhow!(
            "server process exited with {status}"
        )))
    }
}

/// Check that every spelled-out port lies in `[1, 65535]`. Unset ports are
/// not validated. `server_port` is checked before `mongodb_port` and the
/// first violation wins.
pub(crate) fn validate(args: &StartArgs) -> CliResult<()> {
    if let Some(port) = args.server_port
        && !(PORT_MIN..=PORT_MAX).contains(&port)
    {
        return Err(CliError::InvalidPort(PortFlag::Server));
    }
    if let Some(port) = args.mongodb_port
        && !(PORT_MIN..=PORT_MAX).contains(&port)
    {
        return Err(CliError::InvalidPort(PortFlag::Mongodb));
    }
    Ok(())
}
