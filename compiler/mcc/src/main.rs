//! mc compiler CLI.

use mcc::commands::{explain_error, lex_file, parse_file};

fn main() {
    mcc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: mcc lex <file.mc | ->");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: mcc parse <file.mc | ->");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: mcc explain <ERROR_CODE>");
                eprintln!("Example: mcc explain E1001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("mc compiler {}", env!("CARGO_PKG_VERSION"));
        }
        command => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("mc compiler");
    println!();
    println!("Usage: mcc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.mc>      Dump the token stream (use `-` for stdin)");
    println!("  parse <file.mc>    Dump the AST (use `-` for stdin)");
    println!("  explain <code>     Explain an error code (e.g. E1001)");
    println!("  version            Print version information");
    println!("  help               Show this help");
    println!();
    println!("Set MCC_LOG=<filter> for internal tracing (e.g. MCC_LOG=mc_parse=trace).");
}
