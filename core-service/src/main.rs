//! DiaGuard - Headless Entry Point
//!
//! Đọc một form submission (JSON) từ stdin, chạy prediction, in report ra stdout.
//! Stdin rỗng -> dùng default form.

use std::io::Read;

use anyhow::Context;
use diaguard_core::api::{self, commands};
use diaguard_core::constants;
use diaguard_core::{AppConfig, ExplanationRequester, GeminiClient, GeminiConfig, Orchestrator, RawForm};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env trước config: RUST_LOG trong .env cũng áp dụng cho logger
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .init();

    log::info!("Starting {} v{}...", constants::APP_NAME, constants::APP_VERSION);
    log::info!("Config: {}", config.summary());
    if !config.has_api_key() {
        log::warn!("No API key set - reports will use the generic explanation");
    }

    let client = GeminiClient::new(GeminiConfig::from(&config))
        .context("failed to initialise explanation client")?;
    let requester = ExplanationRequester::new(client).with_enabled(config.explain_enabled);
    let orchestrator = Orchestrator::new(requester);

    let form = read_form().context("failed to read form submission from stdin")?;

    let report = commands::run_analysis(&orchestrator, &form)
        .await
        .map_err(anyhow::Error::msg)?;

    log::debug!("Engine status: {:?}", api::get_engine_status(&orchestrator));
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn read_form() -> anyhow::Result<RawForm> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    if input.trim().is_empty() {
        log::info!("Empty input - using default form values");
        return Ok(commands::get_default_form());
    }
    Ok(serde_json::from_str(&input)?)
}
