use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "strikegate", version, about = "Authenticated dispatch gateway for offensive security scan services")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the gateway HTTP server
    Serve(ServeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long, default_value = "8000")]
    pub port: u16,

    /// Listen address
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
