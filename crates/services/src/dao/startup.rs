use bson::{doc, DateTime};
use mongodb::{options::ReturnDocument, Database};
use tracing::warn;

use jazbaa_db::models::{LikeCounter, Startup};

use super::base::{BaseDao, DaoError, DaoResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestKind {
    Investment,
    Hiring,
}

impl InterestKind {
    fn field(self) -> &'static str {
        match self {
            InterestKind::Investment => "interested_investors",
            InterestKind::Hiring => "hiring_investors",
        }
    }
}

pub struct StartupDao {
    pub primary: BaseDao<Startup>,
    pub backup: BaseDao<Startup>,
    pub likes: BaseDao<LikeCounter>,
}

impl StartupDao {
    pub fn new(db: &Database) -> Self {
        Self {
            primary: BaseDao::new(db, Startup::COLLECTION),
            backup: BaseDao::new(db, Startup::BACKUP_COLLECTION),
            likes: BaseDao::new(db, LikeCounter::COLLECTION),
        }
    }

    /// Full-document upsert keyed by slug. A later registration that
    /// computes the same slug replaces the earlier document entirely
    /// (documented last-write-wins policy).
    pub async fn upsert_primary(&self, record: &Startup) -> DaoResult<()> {
        self.primary
            .collection()
            .replace_one(doc! { "_id": &record.slug }, record)
            .upsert(true)
            .await?;
        Ok(())
    }

    pub async fn upsert_backup(&self, record: &Startup) -> DaoResult<()> {
        self.backup
            .collection()
            .replace_one(doc! { "_id": &record.slug }, record)
            .upsert(true)
            .await?;
        Ok(())
    }

    /// Resolve a profile by slug, trying the primary collection first and
    /// falling back to the backup copy.
    pub async fn find_by_slug(&self, slug: &str) -> DaoResult<Startup> {
        if let Some(startup) = self.primary.find_one(doc! { "_id": slug }).await? {
            return Ok(startup);
        }
        if let Some(startup) = self.backup.find_one(doc! { "_id": slug }).await? {
            warn!(slug, "Profile served from backup collection");
            return Ok(startup);
        }
        Err(DaoError::NotFound)
    }

    pub async fn list_active(&self) -> DaoResult<Vec<Startup>> {
        self.primary
            .find_many(doc! { "status": "active" }, Some(doc! { "created_at": -1 }))
            .await
    }

    /// Flip the investor's membership in the interest set for this slug.
    ///
    /// Membership is read fresh, then the write uses the store's own set
    /// primitives ($addToSet / $pull) so concurrent toggles by different
    /// investors never clobber each other. Returns the new membership.
    pub async fn toggle_interest(
        &self,
        slug: &str,
        investor_id: &str,
        kind: InterestKind,
    ) -> DaoResult<bool> {
        let startup = self
            .primary
            .find_one(doc! { "_id": slug })
            .await?
            .ok_or(DaoError::NotFound)?;

        let members = match kind {
            InterestKind::Investment => &startup.interested_investors,
            InterestKind::Hiring => &startup.hiring_investors,
        };
        let is_member = members.iter().any(|m| m == investor_id);

        let update = if is_member {
            doc! {
                "$pull": { kind.field(): investor_id },
                "$set": { "last_updated": DateTime::now() },
            }
        } else {
            doc! {
                "$addToSet": { kind.field(): investor_id },
                "$set": { "last_updated": DateTime::now() },
            }
        };

        self.primary.update_one(doc! { "_id": slug }, update).await?;
        Ok(!is_member)
    }

    /// Increment the per-slug like counter and return the new count.
    pub async fn like(&self, slug: &str) -> DaoResult<i64> {
        let counter = self
            .likes
            .collection()
            .find_one_and_update(doc! { "_id": slug }, doc! { "$inc": { "count": 1_i64 } })
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(DaoError::NotFound)?;
        Ok(counter.count)
    }

    pub async fn like_count(&self, slug: &str) -> DaoResult<i64> {
        Ok(self
            .likes
            .find_one(doc! { "_id": slug })
            .await?
            .map(|c| c.count)
            .unwrap_or(0))
    }
}
