use std::fs;

use briar::interpret;
use clap::Parser;

/// briar is an embeddable interpreter for a small dynamically-typed
/// scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells briar to read a script file instead of inline source text.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let (ok, output) = interpret(&source);
    if ok {
        println!("{output}");
    } else {
        eprintln!("{output}");
        std::process::exit(1);
    }
}
