use clap::Parser;

mod error;
mod output;
mod utils;
mod walk;

use error::Result;

#[derive(Parser)]
#[command(name = "derwalk")]
#[command(
    about = "Print the ASN.1 tags and values found in a DER encoded private key",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    config: walk::Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    walk::execute(cli.config)?;

    Ok(())
}
