//! Status command handler

use anyhow::Result;

use mapdots_core::{Config, DotStore, JsonFilePersistence};

use crate::output::{Output, OutputFormat};

/// Show where the slot lives and what it holds
pub fn show(store: &DotStore<JsonFilePersistence>, config: &Config, output: &Output) -> Result<()> {
    let slot = store.persistence();

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "storage_key": config.storage_key,
                    "path": slot.path(),
                    "exists": slot.exists(),
                    "size": slot.size(),
                    "dots": store.len()
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", store.len());
        }
        OutputFormat::Human => {
            println!("mapdots Status");
            println!("==============");
            println!();
            println!("Slot:");
            println!("  Key:      {}", config.storage_key);
            println!("  Location: {}", slot.path().display());
            if slot.exists() {
                println!("  Size:     {} bytes", slot.size());
            } else {
                println!("  Size:     (not written yet)");
            }
            println!();
            println!("Contents:");
            println!("  Dots: {}", store.len());
        }
    }

    Ok(())
}
