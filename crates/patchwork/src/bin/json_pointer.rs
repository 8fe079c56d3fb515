//! `json-pointer`: look up a JSON Pointer (RFC 6901) in a document.
//!
//! Usage:
//!   json-pointer '<pointer>'
//!
//! The document is read from stdin. The pointer is the first argument.

use patchwork::json_cli::lookup_pointer;
use std::io::{self, Read, Write};

fn main() {
    let pointer = match std::env::args().nth(1) {
        Some(p) => p,
        None => {
            eprintln!("First argument must be a JSON Pointer.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match lookup_pointer(buf.trim(), &pointer) {
        Ok(result) => {
            if let Err(e) = writeln!(io::stdout().lock(), "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
