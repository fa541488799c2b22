//! Parses a TOML file and prints the tree back as TOML.

use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <file>", args[0]);
        process::exit(1);
    }
    match toml_tree::parse_file(&args[1]) {
        Ok(root) => print!("{root}"),
        Err(err) => {
            eprintln!("Failed to parse {}: {err}", args[1]);
            process::exit(1);
        }
    }
}
