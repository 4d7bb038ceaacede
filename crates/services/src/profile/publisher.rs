use tracing::{error, warn};

use jazbaa_db::models::{Invite, Startup};

use crate::dao::base::{DaoError, DaoResult};
use crate::dao::invite::InviteDao;
use crate::dao::startup::StartupDao;

#[derive(Debug)]
pub struct PublishOutcome {
    pub slug: String,
    /// False when the invite could not be marked registered after the
    /// profile write succeeded; a reconciliation record exists instead.
    pub invite_marked: bool,
}

/// Commit an assembled profile. Three ordered steps, deliberately not a
/// multi-document transaction:
///
/// 1. Upsert into the primary collection — the only fatal step.
/// 2. Upsert into the backup collection — a manual-recovery aid, never
///    allowed to fail the publish.
/// 3. Mark the invite registered — if this fails the profile is already
///    live, so the registration is still a success; a reconciliation
///    record is queued for admin review instead of retrying.
pub async fn publish(
    startups: &StartupDao,
    invites: &InviteDao,
    record: &Startup,
    invite: &Invite,
) -> DaoResult<PublishOutcome> {
    startups.upsert_primary(record).await?;

    if let Err(e) = startups.upsert_backup(record).await {
        warn!(slug = %record.slug, error = %e, "Backup profile write failed");
    }

    let invite_id = invite
        .id
        .ok_or_else(|| DaoError::Validation("invite record is missing an id".to_string()))?;
    let invite_marked = match invites.mark_registered(invite_id, &record.slug).await {
        Ok(true) => true,
        Ok(false) => {
            // The update matched nothing: the invite document vanished or
            // already transitioned. Same treatment as a write error.
            error!(
                slug = %record.slug,
                invite_id = %invite_id,
                "Invite document not updated after publish; queueing reconciliation"
            );
            if let Err(e) = invites
                .record_reconciliation(&record.slug, invite_id, "invite document not updated")
                .await
            {
                error!(slug = %record.slug, error = %e, "Reconciliation record write failed");
            }
            false
        }
        Err(e) => {
            error!(
                slug = %record.slug,
                invite_id = %invite_id,
                error = %e,
                "Invite status update failed after publish; queueing reconciliation"
            );
            if let Err(e) = invites
                .record_reconciliation(&record.slug, invite_id, &e.to_string())
                .await
            {
                error!(slug = %record.slug, error = %e, "Reconciliation record write failed");
            }
            false
        }
    };

    Ok(PublishOutcome {
        slug: record.slug.clone(),
        invite_marked,
    })
}
