use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bingx::BingxClient;
use common::Config;

mod render;

#[tokio::main]
async fn main() {
    // ── Logging ──────────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    // ── Config / client ───────────────────────────────────────────────────────
    let cfg = Config::from_env();
    info!(base_url = %cfg.base_url, proxy = cfg.proxy.is_some(), "bxctl starting");

    let client = BingxClient::from_config(&cfg)
        .unwrap_or_else(|e| panic!("Failed to build exchange client: {e}"));

    // ── Menu loop ─────────────────────────────────────────────────────────────
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!();
        println!("1. Get all balances");
        println!("2. Transfer all USDT to spot balance");
        println!("3. Close all orders and positions");
        println!("4. Withdraw all USDT");
        println!("9. Exit");

        let Some(choice) = prompt(&mut lines, "Enter number: ").await else {
            break; // stdin closed
        };

        match choice.trim() {
            "1" => show_balances(&client).await,
            "2" => transfer(&client).await,
            "3" => close_everything(&client).await,
            "4" => withdraw(&client, &mut lines).await,
            "9" => break,
            _ => println!("Wrong input! Try again."),
        }
    }
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, text: &str) -> Option<String> {
    print!("{text}");
    let _ = std::io::stdout().flush();
    lines.next_line().await.ok().flatten()
}

/// Menu 1: spot table plus perp table. Each query fails independently.
async fn show_balances(client: &BingxClient) {
    match ops::spot_balances(client).await {
        Ok(balances) => print!("{}", render::spot_table(&balances)),
        Err(e) => error!("Failed to fetch spot balances: {e}"),
    }
    match ops::perp_balance(client).await {
        Ok(balance) => print!("{}", render::perp_table(&balance)),
        Err(e) => error!("Failed to fetch perp balance: {e}"),
    }
}

/// Menu 2: move the whole perp USDT balance back to spot.
async fn transfer(client: &BingxClient) {
    match ops::transfer_perp_to_spot(client).await {
        Ok(response) => println!("{response}"),
        Err(e) => error!("Transfer failed: {e}"),
    }
}

/// Menu 3: close positions, then cancel orders. The cancel runs even when
/// the close fails.
async fn close_everything(client: &BingxClient) {
    match ops::close_all_positions(client).await {
        Ok(_) => println!("Positions probably closed. Check all balances and try transfer USDT."),
        Err(e) => error!("Failed to close positions: {e}"),
    }
    if let Err(e) = ops::cancel_all_orders(client).await {
        error!("Failed to cancel open orders: {e}");
    }
}

/// Menu 4: withdraw the whole spot USDT balance to a BEP20 address.
async fn withdraw(client: &BingxClient, lines: &mut Lines<BufReader<Stdin>>) {
    let Some(address) = prompt(lines, "Enter BSC address: ").await else {
        return;
    };
    let address = address.trim();
    if address.is_empty() {
        println!("Wrong input! Try again.");
        return;
    }

    match ops::withdraw_all_usdt(client, address).await {
        Ok(response) => println!("{response}"),
        Err(e) => error!("Withdrawal failed: {e}"),
    }
}
