use clap::{Parser as ClapParser, Subcommand};
use metaline::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "metaline")]
#[command(about = "Metaline - compile mapping phrases and run them against JSON")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile phrases and run them against JSON input
    Check {
        /// The phrase text, e.g. 'where.id.in.$>#id;limit:99'
        phrases: String,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't execute
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print the token stream of the phrases
    Tokens {
        phrases: String,
    },

    /// Print the parsed syntax tree of the phrases
    Ast {
        phrases: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            phrases,
            input,
            pretty,
            syntax_only,
        } => run_check(phrases, input, pretty, syntax_only),
        Commands::Tokens { phrases } => cli::render_tokens(&phrases).map(|out| print!("{}", out)),
        Commands::Ast { phrases } => cli::render_ast(&phrases).map(|out| print!("{}", out)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    phrases: String,
    input: Option<String>,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !syntax_only && !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CheckOptions {
        phrases,
        input,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Success(output) => {
            let json = if pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            }?;
            println!("{}", json);
        }
    }
    Ok(())
}
