use clap::{Parser, Subcommand};
use dandy::matcher::Regex;

#[derive(Parser)]
#[command(name = "dandy", about = "Compile and run patterns from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Longest match anchored at the start of the input.
    Match { pattern: String, input: String },
    /// Succeeds only if the whole input is consumed.
    Fullmatch { pattern: String, input: String },
    /// First match anywhere in the input.
    Search { pattern: String, input: String },
    /// Every non-overlapping match in the input.
    Findall { pattern: String, input: String },
    /// Replace every match with a literal string.
    Sub {
        pattern: String,
        replacement: String,
        input: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Match { pattern, input } => {
            let re = compile_or_exit(&pattern);
            print_match(re.match_(&input).as_ref().map(|m| m.as_str()));
        }
        Command::Fullmatch { pattern, input } => {
            let re = compile_or_exit(&pattern);
            print_match(re.fullmatch(&input).as_ref().map(|m| m.as_str()));
        }
        Command::Search { pattern, input } => {
            let re = compile_or_exit(&pattern);
            print_match(re.search(&input).as_ref().map(|m| m.as_str()));
        }
        Command::Findall { pattern, input } => {
            let re = compile_or_exit(&pattern);
            for found in re.findall(&input) {
                println!("{}", found.as_str());
            }
        }
        Command::Sub {
            pattern,
            replacement,
            input,
        } => {
            let re = compile_or_exit(&pattern);
            println!("{}", re.sub(replacement.as_str(), &input));
        }
    }
}

fn compile_or_exit(pattern: &str) -> Regex {
    match Regex::compile(pattern) {
        Ok(re) => re,
        Err(e) => {
            eprintln!("error compiling pattern: {e}");
            std::process::exit(1);
        }
    }
}

fn print_match(found: Option<&str>) {
    match found {
        Some(s) => println!("{s}"),
        None => println!("no match"),
    }
}
