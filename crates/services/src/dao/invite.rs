use bson::{doc, oid::ObjectId, DateTime};
use mongodb::Database;
use rand::RngCore;

use jazbaa_db::models::{Invite, InviteStatus, Reconciliation};

use super::base::{BaseDao, DaoError, DaoResult};

pub struct InviteDao {
    pub base: BaseDao<Invite>,
    pub reconciliations: BaseDao<Reconciliation>,
}

impl InviteDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, Invite::COLLECTION),
            reconciliations: BaseDao::new(db, Reconciliation::COLLECTION),
        }
    }

    /// Create a pending invite for the given email.
    ///
    /// The token is 128 bits from the OS CSPRNG, hex-encoded. Invite
    /// creation never depends on email delivery; the caller sends the
    /// invite mail afterwards and reports failures as a warning.
    pub async fn issue(&self, email: &str, invited_by: ObjectId) -> DaoResult<Invite> {
        let prior = self.base.count(doc! { "email": email }).await?;

        let invite = Invite {
            id: None,
            email: email.to_string(),
            token: generate_token(),
            invited_by,
            invite_number: next_invite_number(prior),
            status: InviteStatus::Pending,
            startup_slug: None,
            invited_at: DateTime::now(),
            registered_at: None,
        };

        let id = self.base.insert_one(&invite).await?;
        self.base.find_by_id(id).await
    }

    pub async fn find_by_token(&self, token: &str) -> DaoResult<Invite> {
        self.base
            .find_one(doc! { "token": token })
            .await?
            .ok_or(DaoError::NotFound)
    }

    /// Transition pending -> registered and link the published slug.
    pub async fn mark_registered(&self, id: ObjectId, slug: &str) -> DaoResult<bool> {
        self.base
            .update_by_id(
                id,
                doc! { "$set": {
                    "status": "registered",
                    "startup_slug": slug,
                    "registered_at": DateTime::now(),
                }},
            )
            .await
    }

    /// Log a profile whose invite could not be marked registered, for
    /// manual admin review. Retrying the invite update automatically is
    /// avoided: the first attempt may have succeeded with only the
    /// confirmation lost.
    pub async fn record_reconciliation(
        &self,
        slug: &str,
        invite_id: ObjectId,
        reason: &str,
    ) -> DaoResult<ObjectId> {
        self.reconciliations
            .insert_one(&Reconciliation {
                id: None,
                startup_slug: slug.to_string(),
                invite_id,
                reason: reason.to_string(),
                created_at: DateTime::now(),
            })
            .await
    }

    pub async fn list(&self) -> DaoResult<Vec<Invite>> {
        self.base
            .find_many(doc! {}, Some(doc! { "invited_at": -1 }))
            .await
    }
}

fn generate_token() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Prior invite count + 1, saturating instead of wrapping on a count that
/// no longer fits the stored width.
fn next_invite_number(prior: u64) -> u32 {
    u32::try_from(prior).map_or(u32::MAX, |n| n.saturating_add(1))
}
