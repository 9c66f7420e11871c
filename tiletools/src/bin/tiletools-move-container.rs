use clap::{arg, command, value_parser};
use std::process::ExitCode;
use tiletools::utils;
use tiletools_core::actions::{move_container, WorkspaceTarget};

#[tokio::main]
async fn main() -> ExitCode {
    let matches = command!("tiletools move-container")
        .about("Moves the focused container to a workspace, creating it on the right output")
        .help_template(utils::get_help_template())
        .args(&[
            arg!(<TARGET> "Workspace number, or a mark (optionally written mark:NAME)")
                .value_parser(value_parser!(WorkspaceTarget)),
            arg!(--"no-auto-back-and-forth" "Targeting the current workspace does nothing"),
        ])
        .get_matches();

    let config = utils::init();
    let Some(target) = matches.get_one::<WorkspaceTarget>("TARGET") else {
        return ExitCode::FAILURE;
    };
    let no_auto_back_and_forth = matches.get_flag("no-auto-back-and-forth");
    utils::exit_status(
        move_container(&config.client(), &config, target, no_auto_back_and_forth).await,
    )
}
