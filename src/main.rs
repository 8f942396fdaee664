use std::env;
use std::io::Read;

use color_eyre::eyre::{Report, WrapErr};
use dotenv::dotenv;
use tracing::info;

use bong_engine::bong;
use bong_engine::bong::code::generate_session_code;
use bong_engine::log;
use bong_engine::messages::{GenerateRequest, GenerateResponse};

const DEFAULT_BET_PER_ROW: u64 = 1;

fn bet_per_row_from_env() -> u64 {
    env::var("BONG_BET_PER_ROW")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_BET_PER_ROW)
}

fn main() -> Result<(), Report> {
    dotenv().ok();
    log::init()?;

    // `bong-engine code` prints a fresh session code instead of generating.
    if env::args().nth(1).as_deref() == Some("code") {
        println!("{}", generate_session_code());
        return Ok(());
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .wrap_err("Failed to read generate request from stdin")?;
    let request: GenerateRequest =
        serde_json::from_str(&input).wrap_err("Invalid generate request")?;

    let bet_per_row = request.bet_per_row.unwrap_or_else(bet_per_row_from_env);
    info!(
        participants = request.participants.len(),
        matches = request.match_indices.len(),
        bet_per_row,
        "Generating combined bong"
    );

    let combined = bong::generate(&request.participants, &request.match_indices, &request.budget);
    let summary = bong::summarize(combined, bet_per_row, request.participants.len());
    info!(rows = summary.rows, total_cost = summary.total_cost, "Generated combined bong");

    let response = GenerateResponse {
        summary,
        participant_count: request.participants.len(),
        bet_per_row,
    };
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
