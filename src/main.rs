mod errors;
mod handlers;
mod operations;
mod state;
mod ui;

use anyhow::Context;
use clap::Parser;
use machcat_core::{parse_selection_args, Dimension, Locale};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use handlers::{handle_command, parse_command};
use operations::FileOperations;
use state::{AppState, UiState};
use ui::{render_catalog, render_json, set_status, StatusMessage};

/// Machine Catalog - Browse a multilingual machine catalog with faceted filters
///
/// Examples:
///   # Show every machine, Russian labels
///   machcat catalog.json
///
///   # Turkish labels, two sectors (OR within a dimension)
///   machcat catalog.json --locale tr --sector s-shoes --sector s-bags
///
///   # Sector AND brand
///   machcat catalog.json --sector s-shoes --brand b-pfaff
///
///   # Generic filter syntax, grouped by brand
///   machcat catalog.json --filter category=c-lockstitch --group-by brand
///
///   # Browse interactively
///   machcat catalog.json --interactive
#[derive(Parser, Debug)]
#[command(name = "machcat")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Several ids for the SAME dimension are combined with OR\n  \
    - Different dimensions are combined with AND\n  \
    - Items without a slug are never listed\n\n\
Ordering:\n  \
    - Priority brands first (Durkopp Adler, Pfaff, KSL), then catalog order\n\n\
Dimensions:\n  \
    - productType, sector, category, brand")]
struct Cli {
    /// Path to the catalog JSON file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Display language (ru, tr, en, uz)
    #[arg(short, long, env = "MACHCAT_LOCALE", default_value = "ru")]
    locale: Locale,

    /// Select a product type id (repeatable)
    #[arg(short = 't', long = "product-type", value_name = "ID")]
    product_types: Vec<String>,

    /// Select a sector id (repeatable)
    #[arg(short, long = "sector", value_name = "ID")]
    sectors: Vec<String>,

    /// Select a category id (repeatable)
    #[arg(short, long = "category", value_name = "ID")]
    categories: Vec<String>,

    /// Select a brand id (repeatable)
    #[arg(short, long = "brand", value_name = "ID")]
    brands: Vec<String>,

    /// Select an option (format: dimension=id, repeatable)
    #[arg(short, long = "filter", value_name = "DIMENSION=ID")]
    filters: Vec<String>,

    /// Group results by a dimension
    #[arg(short = 'G', long = "group-by", value_name = "DIMENSION")]
    group_by: Option<Dimension>,

    /// Read commands from stdin after the first render
    #[arg(short, long, conflicts_with = "json")]
    interactive: bool,

    /// Print the view as JSON instead of text
    #[arg(short, long)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// All selection flags as "dimension=id" strings
    fn selection_args(&self) -> Vec<String> {
        let flagged = [
            (Dimension::ProductType, &self.product_types),
            (Dimension::Sector, &self.sectors),
            (Dimension::Category, &self.categories),
            (Dimension::Brand, &self.brands),
        ];

        flagged
            .iter()
            .flat_map(|(dimension, ids)| ids.iter().map(move |id| format!("{}={}", dimension, id)))
            .chain(self.filters.iter().cloned())
            .collect()
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut state = AppState::new(cli.locale);
    let mut ui = UiState::new(cli.group_by);

    let status = FileOperations::new(&mut state).load_file(&cli.file);
    if status.is_error() {
        // The loader has already reported the details
        process::exit(1);
    }

    let selection = parse_selection_args(&cli.selection_args())
        .map_err(anyhow::Error::msg)
        .context("Invalid filter")?;
    state.selection = selection;
    debug!(selected = state.selection.selected_count(), "Initial selection");

    if cli.json {
        println!("{}", render_json(&state).context("Failed to serialize view")?);
    } else if cli.interactive {
        run_interactive(&mut state, &mut ui)?;
    } else {
        println!("{}", render_catalog(&state, &ui));
    }

    Ok(())
}

/// Read commands line by line until `quit` or end of input
fn run_interactive(state: &mut AppState, ui: &mut UiState) -> anyhow::Result<()> {
    println!("{}", render_catalog(state, ui));
    set_status(&StatusMessage::info("Type 'help' for the list of commands"));

    let stdin = io::stdin();
    let mut line = String::new();

    while ui.running {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read command")?;
        if read == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(command) => {
                let redraw = command.redraws();
                let status = handle_command(state, ui, command);
                if redraw && ui.running {
                    println!("{}", render_catalog(state, ui));
                }
                set_status(&status);
            }
            Err(message) => set_status(&StatusMessage::warning(message)),
        }
    }

    Ok(())
}
