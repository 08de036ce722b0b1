//! `acadex show` — Show a single credential record.

use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use acadex_core::CredentialId;
use acadex_store::{CredentialStore, RocksStore};

use crate::config;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Credential id to fetch.
    #[arg(short = 'i', long)]
    pub credential: String,

    /// Path to the configuration file.
    #[arg(short, long, default_value = "acadex.toml")]
    pub config: PathBuf,
}

pub async fn run(args: &ShowArgs) -> anyhow::Result<()> {
    let config = config::load(&args.config)?;
    let store = Arc::new(RocksStore::open(&config.data_dir)?);

    let id = CredentialId::new(args.credential.clone())?;
    match store.fetch_credential(&id).await? {
        Some(credential) => {
            println!("Credential {}", credential.id);
            println!("  Kind:        {}", credential.kind);
            println!("  Title:       {}", credential.title);
            println!("  Institution: {}", credential.institution);
            println!("  Holder:      {}", credential.holder);
            println!("  Issued:      {}", credential.issued_year());
            println!("  CID:         {}", credential.cid);
        }
        None => {
            println!("Credential {} not found.", id);
        }
    }

    Ok(())
}
