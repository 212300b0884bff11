//! vsext command-line entry point.

use console::style;

fn main() {
    vsext::init_tracing("vsext=warn");

    if let Err(e) = vsext::cli::run() {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
