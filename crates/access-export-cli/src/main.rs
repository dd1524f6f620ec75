//! access-export CLI - Export delimited text files into Microsoft Access.

use access_export::config::DEFAULT_ACCESS_DRIVER;
use access_export::core::identifier::validate_identifier;
use access_export::core::DEFAULT_ENCODING;
use access_export::{
    connect, plan_text_file, ColumnMap, Config, ExportError, ExportOptions, ExportPlan, Exporter,
    TargetConfig, TypeMap,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser)]
#[command(name = "access-export")]
#[command(about = "Export delimited text files into Microsoft Access databases")]
#[command(version)]
struct Cli {
    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every export in a configuration file
    Run {
        /// Path to YAML configuration file
        #[arg(short, long, default_value = "export.yaml")]
        config: PathBuf,

        /// Dry run: print descriptors and SQL without touching the database
        #[arg(long)]
        dry_run: bool,
    },

    /// Export a single delimited text file
    Import {
        /// Destination database file (.accdb or .mdb)
        #[arg(long)]
        database: PathBuf,

        /// Delimited text file with a header row
        #[arg(long)]
        source: PathBuf,

        /// Destination table name
        #[arg(long)]
        table: String,

        /// Field delimiter (use \t for tab)
        #[arg(long, default_value = ",")]
        delimiter: String,

        /// Encoding of the text file
        #[arg(long, default_value = DEFAULT_ENCODING)]
        encoding: String,

        /// Insert into an existing table instead of creating it
        #[arg(long)]
        append: bool,

        /// Recreate the database file even if it exists
        #[arg(long)]
        overwrite: bool,

        /// Column type, e.g. --type Age=LONG (repeatable; PRIMARY for an auto-increment key)
        #[arg(long = "type", value_name = "COL=TYPE", value_parser = parse_pair)]
        types: Vec<(String, String)>,

        /// Destination name for a column (repeatable; unlisted columns are dropped)
        #[arg(long = "rename", value_name = "COL=NEW", value_parser = parse_pair)]
        renames: Vec<(String, String)>,

        /// Blank database copied into place when a new database is needed
        #[arg(long)]
        template: Option<PathBuf>,

        /// ODBC driver name
        #[arg(long, default_value = DEFAULT_ACCESS_DRIVER)]
        driver: String,

        /// Dry run: print the descriptor and SQL without touching the database
        #[arg(long)]
        dry_run: bool,
    },

    /// Load and validate a configuration file
    Check {
        /// Path to YAML configuration file
        #[arg(short, long, default_value = "export.yaml")]
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), ExportError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format).map_err(ExportError::Config)?;

    match cli.command {
        Commands::Run { config, dry_run } => {
            let config = Config::load(&config)?;
            info!("Loaded configuration with {} exports", config.exports.len());

            if dry_run {
                let plans = config
                    .exports
                    .iter()
                    .map(|export| plan_text_file(&export.source, &export.table, &export.options()?))
                    .collect::<Result<Vec<_>, _>>()?;
                print_plans(&plans, cli.output_json)?;
                return Ok(());
            }

            let exporter = Exporter::new(connect(&config.target)?);
            let result = exporter.run(&config)?;

            if cli.output_json {
                println!("{}", result.to_json()?);
            } else {
                println!("\nExport completed!");
                println!("  Database: {}", config.target.path.display());
                println!("  Duration: {:.2}s", result.duration_seconds);
                println!(
                    "  Exports: {}/{}",
                    result.exports_success, result.exports_total
                );
                if !result.failed_tables.is_empty() {
                    println!("  Failed tables: {:?}", result.failed_tables);
                }
            }

            if result.exports_failed > 0 {
                return Err(ExportError::Config(format!(
                    "{} of {} exports failed",
                    result.exports_failed, result.exports_total
                )));
            }
        }

        Commands::Import {
            database,
            source,
            table,
            delimiter,
            encoding,
            append,
            overwrite,
            types,
            renames,
            template,
            driver,
            dry_run,
        } => {
            validate_identifier(&table)?;
            let types: TypeMap = types.into_iter().collect();
            types.validate()?;
            let column_map = if renames.is_empty() {
                None
            } else {
                Some(renames.into_iter().collect::<ColumnMap>())
            };
            let options = ExportOptions {
                column_map,
                types,
                delimiter: delimiter.parse()?,
                append,
                overwrite,
                encoding,
            };

            if dry_run {
                let plan = plan_text_file(&source, &table, &options)?;
                print_plans(&[plan], cli.output_json)?;
                return Ok(());
            }

            let target = TargetConfig {
                path: database,
                template,
                driver,
            };
            let exporter = Exporter::new(connect(&target)?);
            let summary = exporter.export_text_file(&target.path, &source, &table, &options)?;

            if cli.output_json {
                println!("{}", summary.to_json()?);
            } else {
                println!("\nExport completed!");
                println!("  Table: {}", summary.table);
                println!("  Database: {}", summary.database.display());
                println!("  Columns: {}", summary.columns.join(", "));
                println!("  Duration: {:.2}s", summary.duration_seconds);
            }
        }

        Commands::Check { config } => {
            let loaded = Config::load(&config)?;

            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&loaded)?);
            } else {
                println!("Configuration {} is valid", config.display());
                println!("  Database: {}", loaded.target.path.display());
                for export in &loaded.exports {
                    println!("  {} -> {}", export.source.display(), export.table);
                }
            }
        }
    }

    Ok(())
}

fn print_plans(plans: &[ExportPlan], json: bool) -> Result<(), ExportError> {
    if json {
        println!("{}", serde_json::to_string_pretty(plans)?);
        return Ok(());
    }

    for plan in plans {
        println!("-- {} -> {}", plan.staging_file.display(), plan.table);
        print!("{}", plan.descriptor);
        if let Some(create) = &plan.create_statement {
            println!("{};", create);
        }
        println!("{};", plan.insert_statement);
        println!();
    }
    Ok(())
}

/// Parse a `KEY=VALUE` argument.
fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected COL=VALUE, got {:?}", s)),
    }
}

fn setup_logging(verbosity: &str, format: &str) -> Result<(), String> {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    Ok(())
}
