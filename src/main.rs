use anyhow::Result;

use termidex::config::Config;
use termidex::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    ui::run_app(config).await
}
