//! Credential submission: validate, store the document, write the record,
//! link the holder's profile.

use std::sync::Arc;

use acadex_core::{Cid, Credential, CredentialId, CredentialKind, UserId, UserProfile};
use acadex_store::{ContentStore, CredentialStore, ProfileStore, StoreError};

use crate::error::PortalError;
use crate::state::{SubmissionEvent, SubmissionState, SubmissionStateMachine};

/// An institution's credential submission as it arrives from the form.
#[derive(Debug, Clone, Default)]
pub struct CredentialDraft {
    /// Credential kind label (open string, e.g. "degree").
    pub kind_label: String,
    /// Credential title.
    pub title: String,
    /// Name of the subject the credential is issued to.
    pub subject_name: String,
    /// Issuing institution.
    pub institution: String,
    /// The source document bytes.
    pub document: Vec<u8>,
}

impl CredentialDraft {
    /// Validate required fields, collecting every offending field so the
    /// form can mark all of them at once.
    pub fn validate(&self) -> Result<(), PortalError> {
        let mut fields = Vec::new();
        if self.kind_label.trim().is_empty() {
            fields.push("kind".to_string());
        }
        if self.title.trim().is_empty() {
            fields.push("title".to_string());
        }
        if self.subject_name.trim().is_empty() {
            fields.push("subject_name".to_string());
        }
        if self.institution.trim().is_empty() {
            fields.push("institution".to_string());
        }
        if self.document.is_empty() {
            fields.push("document".to_string());
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(PortalError::Validation { fields })
        }
    }
}

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone)]
pub struct SubmissionAck {
    /// Id of the written credential record.
    pub credential_id: CredentialId,
    /// Content address of the stored document.
    pub cid: Cid,
}

/// Runs the submission write path over the three stores.
///
/// Ordering is driven through [`SubmissionStateMachine`]: a failure before
/// the record write leaves no reference behind (the uploaded document is
/// unreferenced by construction); a failure after it surfaces a
/// reconciliation error naming the written record, never losing it.
pub struct CredentialSubmitter {
    content: Arc<dyn ContentStore>,
    credentials: Arc<dyn CredentialStore>,
    profiles: Arc<dyn ProfileStore>,
}

impl CredentialSubmitter {
    /// Create a submitter over the portal's stores.
    pub fn new(
        content: Arc<dyn ContentStore>,
        credentials: Arc<dyn CredentialStore>,
        profiles: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            content,
            credentials,
            profiles,
        }
    }

    /// Submit a credential draft for a holder.
    pub async fn submit(
        &self,
        holder: &UserId,
        draft: CredentialDraft,
    ) -> Result<SubmissionAck, PortalError> {
        let mut state = SubmissionState::Draft;

        draft.validate()?;
        state = SubmissionStateMachine::transition(state, SubmissionEvent::Validate)?;

        let cid = self.content.put_document(&draft.document).await?;
        state = SubmissionStateMachine::transition(state, SubmissionEvent::StoreDocument)?;

        let subject_name = draft.subject_name;
        let credential = Credential::new(
            CredentialKind::from_label(&draft.kind_label),
            draft.title,
            draft.institution,
            holder.clone(),
            cid.clone(),
        );
        let credential_id = credential.id.clone();

        self.credentials.insert_credential(credential).await?;
        state = SubmissionStateMachine::transition(state, SubmissionEvent::WriteRecord)?;

        if let Err(e) = self
            .link_holder(holder, &credential_id, &subject_name)
            .await
        {
            SubmissionStateMachine::transition(state, SubmissionEvent::FlagReconciliation)?;
            tracing::error!(
                holder = %holder,
                credential = %credential_id,
                cid = %cid,
                error = %e,
                "credential written but profile link failed; reconciliation required"
            );
            return Err(PortalError::Reconciliation {
                credential: credential_id,
                cid,
                reason: e.to_string(),
            });
        }
        SubmissionStateMachine::transition(state, SubmissionEvent::LinkProfile)?;

        tracing::info!(
            holder = %holder,
            credential = %credential_id,
            cid = %cid,
            "credential submission accepted"
        );

        Ok(SubmissionAck { credential_id, cid })
    }

    /// Link the credential into the holder's profile. A first submission
    /// creates the profile, seeding its display name from the subject name.
    async fn link_holder(
        &self,
        holder: &UserId,
        credential: &CredentialId,
        subject_name: &str,
    ) -> Result<(), StoreError> {
        match self.profiles.link_credential(holder, credential).await {
            Err(StoreError::ProfileMissing(_)) => {
                let mut profile =
                    UserProfile::new(holder.clone()).with_display_name(subject_name);
                profile.link_credential(credential.clone());
                self.profiles.upsert_profile(profile).await
            }
            other => other,
        }
    }
}
