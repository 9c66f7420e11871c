use clap::command;
use std::process::ExitCode;
use tiletools::utils;
use tiletools_core::actions::fix_workspaces;

#[tokio::main]
async fn main() -> ExitCode {
    command!("tiletools fix-workspaces")
        .about("Moves every numbered workspace to the output its number belongs to")
        .help_template(utils::get_help_template())
        .get_matches();

    let config = utils::init();
    let result = fix_workspaces(&config.client(), &config).await;
    utils::exit_status(result.map(|_| ()))
}
