#![deny(clippy::all, clippy::pedantic)]
//! cantrip — a command-line entry stub that prints its own documentation.

mod args;
mod help;

use std::io;
use std::process;

use anyhow::Context;

fn main() {
    let mut argv = std::env::args().skip(1);
    let Some(first) = argv.next() else {
        // No arguments: nothing to do, fall through to a normal exit.
        return;
    };

    if args::is_help_request(&first) {
        let result = help::print(&mut io::stdout(), help::doc_text())
            .context("failed to write help text");
        if let Err(err) = result {
            eprintln!("cantrip: {err:#}");
        }
    }

    // Any argument at all, recognized or not, terminates with status 1.
    process::exit(1);
}
