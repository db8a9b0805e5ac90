use crate::steps::sync::SyncArgs;
use clap::Parser;

#[derive(Parser)]
#[command(name = "pubspec-ref-sync", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub args: SyncArgs,
}
