use clap::Parser as ClapParser;
use jg::cli::{self, CliError, GenerateOptions};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "jg")]
#[command(about = cli::ABOUT)]
#[command(after_long_help = cli::HELP)]
#[command(version)]
struct Cli {
    /// Pretty print the generated JSON
    #[arg(short, long = "pretty-print")]
    pretty: bool,

    /// Substitute $NAME with VALUE (repeatable, the last one wins)
    #[arg(short = 's', long = "subst", value_name = "NAME=VALUE")]
    substitutions: Vec<String>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Generator expressions (read from stdin if not provided)
    #[arg(value_name = "GENERATORS")]
    generators: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let expressions = if cli.generators.is_empty() && !atty::is(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        debug!(bytes = buffer.len(), "read generators from stdin");
        let joined = buffer.lines().collect::<Vec<_>>().join(" ");
        if joined.trim().is_empty() { vec![] } else { vec![joined] }
    } else {
        cli.generators
    };

    let options = GenerateOptions {
        expressions,
        substitutions: cli.substitutions,
        pretty: cli.pretty,
    };

    for json in cli::execute_generate(&options)? {
        println!("{}", json);
    }
    Ok(())
}
