//! Thin binary entrypoint for the Dagda CLI.

use std::process;

#[tokio::main]
async fn main() {
    let exit_code = dagda_cli::run().await;
    if exit_code != 0 {
        process::exit(exit_code);
    }
}
