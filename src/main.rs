mod app;
mod cli;
mod config;
mod consts;
mod error;
mod fetch;
mod launch;
mod output;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse().with_config(&Config::load());
    let opts = cli.into_options();
    app::run(&opts);
}
