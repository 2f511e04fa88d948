use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use srpolicyctl::{Config, EncodeOptions};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, help = "Configuration file")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Show {
        #[arg(short, long, help = "Policy YAML file")]
        filename: PathBuf,

        #[arg(short, long, help = "Output in JSON format")]
        json: bool,
    },
    Encode {
        #[arg(short, long, help = "Policy YAML file")]
        filename: PathBuf,

        #[arg(long, help = "Carry the Priority sub-TLV")]
        priority: bool,

        #[arg(long, help = "Carry the Preference sub-TLV")]
        preference: bool,
    },
    Decode {
        #[arg(long, help = "NLRI in hex")]
        nlri: String,

        #[arg(long, help = "Path attribute block in hex", default_value = "")]
        attrs: String,

        #[arg(long, help = "Decode as a withdrawal")]
        withdraw: bool,
    },
    Create {
        #[arg(short, long, help = "Policy YAML files", num_args = 1.., required = true)]
        filename: Vec<PathBuf>,
    },
}

fn print_help() {
    eprintln!("`srpolicyctl' transcodes SRv6 Policies to and from BGP SR Policy paths.");
    eprintln!();
    eprintln!("Basic Commands:");
    eprintln!("  show        Show a policy file.");
    eprintln!("  encode      Encode a policy file into NLRI and path attributes.");
    eprintln!("  decode      Decode NLRI and path attributes into a policy.");
    eprintln!("  create      Submit policy files to the in-process speaker and list it.");
}

fn tracing_set(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    tracing_set(&config.log_level);

    match &cli.command {
        Some(Commands::Show { filename, json }) => {
            cmd::show::show(filename, *json)?;
        }
        Some(Commands::Encode {
            filename,
            priority,
            preference,
        }) => {
            let opts = EncodeOptions {
                priority: *priority || config.encode.priority,
                preference: *preference || config.encode.preference,
            };
            cmd::encode::encode(filename, &opts)?;
        }
        Some(Commands::Decode {
            nlri,
            attrs,
            withdraw,
        }) => {
            cmd::decode::decode(nlri, attrs, *withdraw, config.family)?;
        }
        Some(Commands::Create { filename }) => {
            cmd::create::create(filename, &config).await?;
        }
        None => {
            print_help();
        }
    }

    Ok(())
}
