//! Entry point for the `carefare` command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = carefare_cli::run() {
        eprintln!("carefare: {err}");
        std::process::exit(1);
    }
}
