//! JSON rendering helpers for command responses.

use anyhow::anyhow;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::client::{CliError, CliResult};

/// Render a response body as pretty-printed JSON with lexicographically
/// sorted keys and a 4-space indent.
///
/// Key ordering falls out of `serde_json::Map` being backed by a `BTreeMap`;
/// a body that is not valid JSON is a decoding failure with no fallback
/// rendering.
pub(crate) fn render_json(body: &[u8]) -> CliResult<String> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| CliError::failure(anyhow!("response body is not valid JSON: {err}")))?;

    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;

    String::from_utf8(buffer)
        .map_err(|err| CliError::failure(anyhow!("rendered JSON is not valid UTF-8: {err}")))
}

/// Print a response body to stdout.
pub(crate) fn print_json(body: &[u8]) -> CliResult<()> {
    println!("{}", render_json(body)?);
    Ok(())
}
