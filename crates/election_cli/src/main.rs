mod app;
mod cli;
mod site_file;

use clap::Parser;
use scrape_logging::scrape_debug;

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    scrape_logging::initialize(&cli.log_options());
    scrape_debug!("{:?}", cli);

    let config = site_file::load(cli.site_config.as_deref())?;
    app::run(&cli, config, &mut std::io::stdout()).await
}
