use galactic_numerals::Interpreter;
use log::error;
use std::fs::File;
use std::io::{self, BufReader};

fn main() {
    // Initialize the logger
    env_logger::init();

    let mut interpreter = Interpreter::new();
    let stdout = io::stdout();

    // Read statements from the file named on the command line, or from stdin
    let result = match std::env::args().nth(1) {
        Some(path) => match File::open(&path) {
            Ok(file) => interpreter.run(BufReader::new(file), stdout.lock()),
            Err(e) => {
                error!("Failed to open {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => interpreter.run(io::stdin().lock(), stdout.lock()),
    };

    if let Err(e) = result {
        error!("Error interpreting statements: {}", e);
        std::process::exit(1);
    }
}
