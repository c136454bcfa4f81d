use galactic_numerals::constants::INVALID_NUMERAL_MESSAGE;
use galactic_numerals::{Error, NumeralEngine};
use log::{debug, error};

/// Converts each argument: integers become canonical numerals, numerals become integers.
fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        error!("Usage: roman-convert <NUMERAL|INTEGER>...");
        std::process::exit(2);
    }

    let mut has_failures = false;

    for arg in &args {
        match NumeralEngine::convert(arg) {
            Ok(output) => println!("{} => {}", arg, output),
            Err(Error::InvalidNumeral(_)) => {
                debug!("Failed to convert {}", arg);
                println!("{}: {}", arg, INVALID_NUMERAL_MESSAGE);
                has_failures = true;
            }
            Err(e) => {
                println!("{}: Error: {}", arg, e);
                has_failures = true;
            }
        }
    }

    if has_failures {
        std::process::exit(1);
    }
}
