use anyhow::Result;
use clap::{arg, command};
use std::path::PathBuf;
use std::process::ExitCode;
use tiletools::utils::file_handler::{get_default_path, load_config_file};
use tiletools::Config;
use tiletools_core::queries::ordered_output_names;
use tiletools_core::{Config as _, WindowManager};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let matches = command!("tiletools check")
        .about("Checks the configuration file and, with --live, the running window manager")
        .help_template(tiletools::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!(-l --live "Queries the window manager and reports misplaced workspaces."),
            arg!([INPUT] "Sets the input file to use. Uses the default config file otherwise."),
        ])
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let config_file = match matches.get_one::<String>("INPUT") {
        Some(path) => PathBuf::from(path),
        None => get_default_path()?,
    };

    println!(
        "\x1b[0;94m::\x1b[0m tiletools version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "\x1b[0;94m::\x1b[0m Loading configuration from {} . . .",
        config_file.display()
    );
    let config = match load_config_file(Some(&config_file)) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            config
        }
        Err(err) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m Configuration failed. Reason: {err:?}\x1b[0m");
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("\x1b[0;94m::\x1b[0m Checking settings . . .");
    let mut ok = config.check_log_level(verbose);
    ok &= config.check_slots_per_output(verbose);
    println!("\x1b[0;94m::\x1b[0m Checking environment . . .");
    ok &= config.check_messenger(verbose);
    config.check_socket(verbose);
    if ok {
        println!("\x1b[0;92m    -> Settings OK \x1b[0m");
    }

    if ok && matches.get_flag("live") {
        println!("\x1b[0;94m::\x1b[0m Checking workspaces . . .");
        ok &= check_workspaces(&config).await;
    }
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Prints the output order and every workspace `fix-workspaces` would move.
async fn check_workspaces(config: &Config) -> bool {
    let client = config.client();
    let (outputs, workspaces) = match (client.get_outputs().await, client.get_workspaces().await) {
        (Ok(outputs), Ok(workspaces)) => (outputs, workspaces),
        (Err(err), _) | (_, Err(err)) => {
            println!("\x1b[1;91mERROR: Couldn't query {}: {err}\x1b[0m", config.messenger());
            return false;
        }
    };

    let scheme = config.numbering();
    let names = ordered_output_names(&outputs);
    for (index, name) in names.iter().enumerate() {
        let first = scheme.slots_per_output() * i32::try_from(index).unwrap_or(i32::MAX);
        println!(
            "    {name}: workspaces {}..={}",
            first + 1,
            first + scheme.slots_per_output()
        );
    }

    let mut misplaced = 0;
    for ws in &workspaces {
        let Some(num) = ws.num else { continue };
        match scheme.try_fix_output(num, &ws.output, &names) {
            Ok(None) => {}
            Ok(Some(_)) => {
                misplaced += 1;
                println!(
                    "\x1b[1;93mWARN: Workspace {num} is on {} but belongs to {}\x1b[0m",
                    ws.output,
                    scheme.output_for(num, &names).unwrap_or("?")
                );
            }
            Err(err) => {
                misplaced += 1;
                println!("\x1b[1;93mWARN: {err}\x1b[0m");
            }
        }
    }
    if misplaced == 0 {
        println!("\x1b[0;92m    -> Workspaces OK \x1b[0m");
    } else {
        println!("    Run tiletools-fix-workspaces to move {misplaced} workspace(s).");
    }
    true
}
