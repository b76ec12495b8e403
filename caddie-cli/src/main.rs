//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = caddie_cli::run() {
        eprintln!("caddie: {err}");
        std::process::exit(1);
    }
}
