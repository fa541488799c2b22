//! Merges an override TOML file onto a base file and prints the result.

use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <basefile> <overridefile>", args[0]);
        process::exit(1);
    }
    match toml_tree::parse_base_and_override(&args[1], &args[2], true) {
        Ok(merged) => print!("{merged}"),
        Err(err) => {
            eprintln!("Failed to merge {} and {}: {err}", args[1], args[2]);
            process::exit(1);
        }
    }
}
