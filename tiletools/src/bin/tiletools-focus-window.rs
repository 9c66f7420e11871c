use clap::{arg, command, value_parser};
use std::process::ExitCode;
use tiletools::utils;
use tiletools_core::actions::focus_window;
use tiletools_core::Direction;

#[tokio::main]
async fn main() -> ExitCode {
    let matches = command!("tiletools focus-window")
        .about("Moves the focus, keeping a fullscreen window fullscreen on its own output")
        .help_template(utils::get_help_template())
        .arg(arg!(<DIRECTION> "left, right, up or down").value_parser(value_parser!(Direction)))
        .get_matches();

    let config = utils::init();
    let Some(&direction) = matches.get_one::<Direction>("DIRECTION") else {
        return ExitCode::FAILURE;
    };
    utils::exit_status(focus_window(&config.client(), direction).await)
}
