//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = rigwise_cli::run() {
        eprintln!("rigwise: {err}");
        std::process::exit(1);
    }
}
