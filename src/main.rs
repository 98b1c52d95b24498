mod config;
mod source;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::{
    config_file_path, config_file_present, lookup_config_value, resolve_project_config,
};

#[derive(Parser, Debug)]
#[command(name = "prjconf", version, about = "Project config resolver", long_about = None)]
struct Cli {
    /// Project root containing the .config file
    #[arg(global = true, long = "root", default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve and print the project target and app
    Show,
    /// Look up a single key and print its value
    Get {
        key: String,
        /// Config file to read instead of <root>/.config
        #[arg(long = "file")]
        file: Option<PathBuf>,
    },
    /// Report whether the config file is present
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show => {
            let cfg = resolve_project_config(&cli.root).await;
            println!("show: target={} app={}", cfg.target, cfg.app);
        }
        Commands::Get { key, file } => {
            let path = file.unwrap_or_else(|| config_file_path(&cli.root));
            match lookup_config_value(&path, &key).await {
                Some(value) => println!("{value}"),
                None => bail!("{} not set in {}", key, path.display()),
            }
        }
        Commands::Check => {
            if config_file_present(&cli.root) {
                println!("check: config present");
            } else {
                println!("check: no config file, defaults apply");
            }
        }
    }

    Ok(())
}
