use clap::{arg, command, value_parser};
use std::process::ExitCode;
use tiletools::utils;
use tiletools_core::actions::{move_to_output, OutputStep};

#[tokio::main]
async fn main() -> ExitCode {
    let matches = command!("tiletools move-to-output")
        .about("Moves the focused workspace to the next or previous output")
        .help_template(utils::get_help_template())
        .arg(arg!(<STEP> "next or prev").value_parser(value_parser!(OutputStep)))
        .get_matches();

    let config = utils::init();
    let Some(&step) = matches.get_one::<OutputStep>("STEP") else {
        return ExitCode::FAILURE;
    };
    utils::exit_status(move_to_output(&config.client(), &config, step).await)
}
