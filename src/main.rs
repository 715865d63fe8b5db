// --- Catálogo de horarios - Archivo principal ---

use clap::{Parser, Subcommand};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use horario::algorithm::summarize_catalog;
use horario::config::Config;
use horario::datafiles::{load_catalog_from_dir, write_catalog_json};
use horario::run_server;

#[derive(Parser)]
#[command(name = "horario", about = "Timetable CSV parser and section catalog server")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lee los archivos del día y escribe el catálogo JSON
    Build {
        /// Directorio con los CSV por día o el workbook
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Archivo de salida
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Levanta la API HTTP del catálogo
    Serve {
        #[arg(long)]
        bind: Option<String>,
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn build(config: &Config) -> horario::Result<()> {
    let dir = config.resolved_datafiles_dir();
    let catalog = load_catalog_from_dir(&dir)?;
    let summary = summarize_catalog(&catalog);
    write_catalog_json(&catalog, &config.output)?;
    info!(
        "{} sections, {} courses, {} sessions -> {:?}",
        summary.sections, summary.courses, summary.sessions, config.output
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    // primero .env, así RUST_LOG también puede venir de ahí
    let mut config = Config::from_env();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match cli.command {
        Command::Build { dir, out } => {
            config.datafiles_dir = dir.or(config.datafiles_dir);
            if let Some(o) = out {
                config.output = o;
            }
            match build(&config) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    error!("build failed: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Command::Serve { bind, dir } => {
            if let Some(b) = bind {
                config.bind = b;
            }
            config.datafiles_dir = dir.or(config.datafiles_dir);
            info!("=== Catálogo de horarios (API) ===");
            match run_server(config).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    error!("server error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
