use super::{is_program_in_path, Config};
use tracing_subscriber::EnvFilter;

impl Config {
    pub fn check_log_level(&self, verbose: bool) -> bool {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => {
                if verbose {
                    println!("Log level is ok.");
                }
                true
            }
            Err(err) => {
                println!("\x1b[1;91mERROR: Log level is invalid: {err}\x1b[0m");
                false
            }
        }
    }

    pub fn check_slots_per_output(&self, verbose: bool) -> bool {
        if verbose {
            println!("Slots per output: {}", self.slots_per_output);
        }
        if self.slots_per_output > 0 {
            return true;
        }
        println!(
            "\x1b[1;91mERROR: slots_per_output must be positive, got {}\x1b[0m",
            self.slots_per_output
        );
        false
    }

    /// The messenger must be a path to a file or a program found in `PATH`.
    pub fn check_messenger(&self, verbose: bool) -> bool {
        let messenger = self.messenger();
        if verbose {
            println!("Looking for messenger {messenger}.");
        }
        let found = if messenger.contains('/') {
            std::path::Path::new(messenger).is_file()
        } else {
            is_program_in_path(messenger)
        };
        if !found {
            println!("\x1b[1;91mERROR: Messenger `{messenger}` not found\x1b[0m");
        }
        found
    }

    /// A missing socket is only a warning: the messenger may still find one on its own.
    pub fn check_socket(&self, verbose: bool) {
        match self.socket_path() {
            Some(path) if path.exists() => {
                if verbose {
                    println!("Socket {} exists.", path.display());
                }
            }
            Some(path) => {
                println!("\x1b[1;93mWARN: Socket {} does not exist\x1b[0m", path.display());
            }
            None => println!(
                "\x1b[1;93mWARN: No socket configured and ${} is not set\x1b[0m",
                self.flavor.socket_env()
            ),
        }
    }
}
