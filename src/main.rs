use std::{env, fs::read_to_string, process::exit};

use rlox::{repl::run_prompt, run};

// Exit codes follow sysexits.h: 64 usage, 65 bad input data, 66 missing
// input file, 74 I/O error.
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        println!("Usage: rlox [script]");
        exit(64);
    } else if args.len() == 2 {
        run_file(&args[1]);
    } else if let Err(err) = run_prompt() {
        println!("Failed to read input: {}", err);
        exit(74);
    }
}

fn run_file(path: &str) {
    let source = match read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            println!("Failed to read {}: {}", path, err);
            exit(66);
        }
    };

    if run(&source, path) {
        exit(65);
    }
}
