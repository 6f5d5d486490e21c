use super::ShuttleOperation;
use clap::Parser;

/// command line tool for grafting a shuttle transit service onto a
/// MATSim network
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ShuttleApp {
    #[command(subcommand)]
    pub op: ShuttleOperation,
}
