use clap::{arg, command};
use std::process::ExitCode;
use tiletools::utils;
use tiletools_core::actions::split_and_exec;

#[tokio::main]
async fn main() -> ExitCode {
    let matches = command!("tiletools exec")
        .about("Runs a program next to the focused window, splitting along its wider side")
        .help_template(utils::get_help_template())
        .arg(
            arg!([COMMAND] ... "The program and its arguments. Uses default_exec otherwise.")
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
        .get_matches();

    let config = utils::init();
    let program = matches
        .get_many::<String>("COMMAND")
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "));
    utils::exit_status(split_and_exec(&config.client(), &config, program).await)
}
