use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docledger",
    about = "Docledger — tamper-evident document registration ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the registration server
    Serve(ServeArgs),
    /// Build a sample chain offline, print it, and audit it
    Demo(DemoArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub bind: String,
}

#[derive(Args)]
pub struct DemoArgs {
    /// Number of sample registrations to append
    #[arg(short = 'n', long, default_value = "3")]
    pub count: usize,
}
