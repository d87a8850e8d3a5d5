//! # Sauda Dashboard Binary
//!
//! Headless smoke surface: loads the drawer and report screens for
//! today and prints the day's position with two-decimal formatting.
//! Useful for checking the backend wiring end to end without a UI.

use chrono::Local;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sauda_client::{ApiClient, ClientConfig};
use sauda_dashboard::{DrawerScreen, ReportScreen};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; RUST_LOG controls verbosity
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting Sauda dashboard...");

    // Load configuration
    let config = ClientConfig::load()?;
    info!(api_url = %config.api_url, "Configuration loaded");

    let client = ApiClient::new(&config);
    let today = Local::now().date_naive();

    // Independent screens, loaded together
    let (drawer, report) = tokio::join!(
        DrawerScreen::load(&client),
        ReportScreen::load(&client, today)
    );
    let drawer = drawer?;
    let report = report?;
    let summary = &report.daily.summary;

    println!("Sauda — {}", today);
    println!();
    println!("  Available Cash    {}", drawer.balance.cash);
    println!("  Available GPay    {}", drawer.balance.gpay);
    println!("  Withdrawn Today   {}", drawer.total_withdrawn(Some(today)));
    println!();
    println!(
        "  Sales             {}  ({} transactions)",
        summary.sales.total, summary.sales.count
    );
    println!("    Retail          {}", summary.sales.retail);
    println!("    Wholesale       {}", summary.sales.wholesale);
    println!("  Expenses          {}", summary.expenses.total);
    println!("  Cost              {}", summary.cost);

    let label = if summary.is_profit() { "Profit" } else { "Loss" };
    println!("  {:<17} {}", label, summary.profit.abs());

    Ok(())
}
