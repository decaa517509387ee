//! Interactive mode for the server.
//!
//! Prompts the user for bind address, port, and dataset path before
//! starting the server.

use std::path::PathBuf;

use dialoguer::{Confirm, Input};

use crate::config::ServerConfig;

/// Runs the server in interactive mode, prompting for configuration.
///
/// Prompts start from `defaults` (normally the environment-derived
/// config) and the confirmed values are handed to [`super::run_server`].
///
/// # Errors
///
/// Returns an `std::io::Result` error if the underlying server fails to
/// start.
#[allow(clippy::future_not_send)]
pub async fn run(defaults: ServerConfig) -> std::io::Result<()> {
    println!("Rate Map Server");
    println!();

    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default(defaults.bind_addr.clone())
        .interact_text()
        .unwrap_or_else(|_| defaults.bind_addr.clone());

    let port: u16 = Input::new()
        .with_prompt("Port")
        .default(defaults.port)
        .interact_text()
        .unwrap_or(defaults.port);

    let data_path: String = Input::new()
        .with_prompt("Rates CSV (.csv or .csv.gz)")
        .default(defaults.data_path.display().to_string())
        .interact_text()
        .unwrap_or_else(|_| defaults.data_path.display().to_string());

    if !Confirm::new()
        .with_prompt(format!("Start server on {bind_addr}:{port} with {data_path}?"))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::run_server(ServerConfig {
        bind_addr,
        port,
        data_path: PathBuf::from(data_path),
        ..defaults
    })
    .await
}
