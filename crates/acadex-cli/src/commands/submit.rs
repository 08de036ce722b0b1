//! `acadex submit` — Submit a credential for a holder.

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use acadex_core::UserId;
use acadex_portal::{CredentialDraft, Portal};
use acadex_store::RocksStore;

use crate::config;

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// User id of the credential holder.
    #[arg(short, long)]
    pub user: String,

    /// Credential kind label (degree, certificate, diploma, ...).
    #[arg(short, long)]
    pub kind: String,

    /// Credential title.
    #[arg(short, long)]
    pub title: String,

    /// Name of the subject the credential is issued to.
    #[arg(short = 'n', long)]
    pub subject_name: String,

    /// Issuing institution.
    #[arg(short, long)]
    pub institution: String,

    /// Path to the source document to store.
    #[arg(short, long)]
    pub document: PathBuf,

    /// Path to the configuration file.
    #[arg(short, long, default_value = "acadex.toml")]
    pub config: PathBuf,
}

pub async fn run(args: &SubmitArgs) -> anyhow::Result<()> {
    let config = config::load(&args.config)?;
    let store = Arc::new(RocksStore::open(&config.data_dir)?);
    let portal = Portal::new(
        store.clone(),
        store.clone(),
        store,
        config.lookup_timeout(),
    );

    let holder = UserId::new(args.user.clone())?;
    let document = std::fs::read(&args.document)
        .with_context(|| format!("reading document {}", args.document.display()))?;

    let draft = CredentialDraft {
        kind_label: args.kind.clone(),
        title: args.title.clone(),
        subject_name: args.subject_name.clone(),
        institution: args.institution.clone(),
        document,
    };

    let ack = portal.submit_credential(&holder, draft).await?;

    println!("Credential submitted!");
    println!("  ID:   {}", ack.credential_id);
    println!("  CID:  {}", ack.cid);
    Ok(())
}
