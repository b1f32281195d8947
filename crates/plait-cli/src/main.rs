use clap::{Parser, Subcommand};
use plait::end_of_input;
use plait_grammars::{arithmetic, csv, html};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "plait")]
#[command(about = "Run the plait example grammars on expressions and files")]
#[command(version)]
struct Cli {
    /// Print debug logs (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate an arithmetic expression
    Eval {
        /// Expression such as "2 * (3 + 4) ^ 2"
        expression: String,
    },

    /// Parse a CSV file and print one record per line
    Csv {
        /// Input .csv file
        path: PathBuf,
    },

    /// Parse an HTML fragment file and print it back
    Html {
        /// Input .html file
        path: PathBuf,

        /// Drop comments from the output
        #[arg(long)]
        remove_comments: bool,

        /// Parse a complete document (doctype and root element)
        #[arg(long)]
        document: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse error {0}")]
    Parse(#[from] plait::ParseError),
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Command::Eval { expression } => cmd_eval(&expression),
        Command::Csv { path } => cmd_csv(&path),
        Command::Html {
            path,
            remove_comments,
            document,
        } => cmd_html(&path, remove_comments, document),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn read_source(path: &Path) -> Result<String, CliError> {
    if !path.exists() {
        return Err(CliError::NotFound(path.to_path_buf()));
    }
    log::debug!("reading {}", path.display());
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn cmd_eval(expression: &str) -> Result<(), CliError> {
    let value = arithmetic::evaluate(expression)?;
    println!("{value}");
    Ok(())
}

fn cmd_csv(path: &Path) -> Result<(), CliError> {
    let source = read_source(path)?;
    let records = csv::csv()
        .skip_trailing(end_of_input())
        .parse_value(&source)?;
    log::debug!("parsed {} records", records.len());

    for record in &records {
        let fields: Vec<String> = record
            .iter()
            .map(|(name, cell)| format!("{name}={cell}"))
            .collect();
        println!("{}", fields.join(", "));
    }
    Ok(())
}

fn cmd_html(path: &Path, remove_comments: bool, document: bool) -> Result<(), CliError> {
    let source = read_source(path)?;
    let grammar = if document {
        html::document()
    } else {
        html::fragments()
    };
    let nodes = grammar.skip_trailing(end_of_input()).parse_value(&source)?;
    log::debug!("parsed {} top-level nodes", nodes.len());

    let options = html::SerializeOptions { remove_comments };
    print!("{}", html::serialize_fragments(&nodes, options));
    Ok(())
}
