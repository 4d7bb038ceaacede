use bson::{doc, oid::ObjectId, DateTime};
use mongodb::Database;

use jazbaa_db::models::{Comment, CommentType};

use super::base::{BaseDao, DaoResult};

pub struct CommentDao {
    pub base: BaseDao<Comment>,
}

impl CommentDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, Comment::COLLECTION),
        }
    }

    pub async fn add(
        &self,
        startup_slug: &str,
        investor_id: ObjectId,
        investor_name: &str,
        text: &str,
        comment_type: CommentType,
    ) -> DaoResult<Comment> {
        let comment = Comment {
            id: None,
            startup_slug: startup_slug.to_string(),
            investor_id,
            investor_name: investor_name.to_string(),
            comment: text.to_string(),
            comment_type,
            created_at: DateTime::now(),
        };

        let id = self.base.insert_one(&comment).await?;
        self.base.find_by_id(id).await
    }

    pub async fn list_for_startup(&self, startup_slug: &str) -> DaoResult<Vec<Comment>> {
        self.base
            .find_many(
                doc! { "startup_slug": startup_slug },
                Some(doc! { "created_at": -1 }),
            )
            .await
    }
}
