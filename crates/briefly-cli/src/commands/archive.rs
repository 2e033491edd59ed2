use clap::Subcommand;

use briefly_core::ArchiveStore;

use super::{load_config, open_store};

#[derive(Subcommand)]
pub enum ArchiveAction {
    /// List archived scoops as JSON, newest content date first
    List,
    /// Print the number of archived scoops
    Count,
}

pub fn run(action: ArchiveAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store()?;
    let archive = ArchiveStore::new(store, load_config().region.timezone());

    match action {
        ArchiveAction::List => {
            println!("{}", serde_json::to_string_pretty(&archive.list())?);
        }
        ArchiveAction::Count => {
            println!("{}", archive.count());
        }
    }
    Ok(())
}
