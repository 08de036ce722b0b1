//! `acadex dashboard` — Resolve a user's profile and aggregate their
//! credentials.

use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use acadex_core::UserId;
use acadex_portal::{
    AuthenticatedUser, Dashboard, IdentityProvider, Notice, Portal, SessionContext,
    StaticIdentityProvider,
};
use acadex_store::RocksStore;

use crate::config;

#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// User id to load the dashboard for.
    #[arg(short, long)]
    pub user: String,

    /// Path to the configuration file.
    #[arg(short, long, default_value = "acadex.toml")]
    pub config: PathBuf,
}

pub async fn run(args: &DashboardArgs) -> anyhow::Result<()> {
    let config = config::load(&args.config)?;
    let store = Arc::new(RocksStore::open(&config.data_dir)?);
    let portal = Portal::new(
        store.clone(),
        store.clone(),
        store,
        config.lookup_timeout(),
    );

    // The operator names the user; in the portal proper this comes from
    // the identity provider.
    let user = AuthenticatedUser::new(UserId::new(args.user.clone())?);
    let provider = StaticIdentityProvider::signed_in(user);

    let mut session = SessionContext::new();
    if let Some(user) = provider.current_user().await? {
        session.sign_in(user);
    }

    match portal.load_dashboard(&session).await? {
        Dashboard::SignedOut => {
            println!("Not signed in.");
        }
        Dashboard::NewUser { user } => {
            println!("No profile yet for {}.", user.id);
        }
        Dashboard::Ready {
            profile,
            mut credentials,
            notices,
        } => {
            let name = profile.display_name.as_deref().unwrap_or(profile.id.as_str());
            println!("Dashboard for {}", name);

            for notice in &notices {
                match notice {
                    Notice::CredentialsLoadFailed { count } => {
                        println!("  (failed to load {} credential(s))", count);
                    }
                }
            }

            if credentials.is_empty() {
                println!("No credentials found.");
                return Ok(());
            }

            // The aggregate carries no order; sort newest first for display
            credentials.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            for credential in &credentials {
                println!(
                    "  [{}] {} — {} ({}, {})",
                    credential.kind,
                    credential.title,
                    credential.institution,
                    credential.issued_year(),
                    credential.cid,
                );
            }
        }
    }

    Ok(())
}
