use std::net::IpAddr;

use clap::{Parser, Subcommand};
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "faro", about = "Run the self-assessment service")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[arg(
        short,
        long,
        help = "The url of the directory holding the question bank (csv) and the assessment config (yaml)"
    )]
    pub(crate) data: Url,

    #[arg(long, help = "Allowed CORS origins")]
    pub(crate) origins: Vec<String>,

    #[arg(long, default_value = "dev", help = "Set the environment name used in logs")]
    pub(crate) env: String,
}
