use std::io;

use clap::Parser;
use eyre::Result;
use notify_probe::{cli, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let mut args = cli::Args::parse();
    logging::init(args.verbose)?;

    cli::dispatch(&mut args, &mut io::stdout()).await?;

    Ok(())
}
