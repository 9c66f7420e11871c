use clap::{arg, command, value_parser};
use std::process::ExitCode;
use tiletools::utils;
use tiletools_core::actions::{focus_workspace, WorkspaceTarget};

#[tokio::main]
async fn main() -> ExitCode {
    let matches = command!("tiletools focus-workspace")
        .about("Focuses a workspace on the output its number belongs to")
        .help_template(utils::get_help_template())
        .arg(
            arg!(<TARGET> "Workspace number, or a mark (optionally written mark:NAME)")
                .value_parser(value_parser!(WorkspaceTarget)),
        )
        .get_matches();

    let config = utils::init();
    let Some(target) = matches.get_one::<WorkspaceTarget>("TARGET") else {
        return ExitCode::FAILURE;
    };
    utils::exit_status(focus_workspace(&config.client(), &config, target).await)
}
