use bson::{doc, DateTime};
use mongodb::Database;

use jazbaa_db::models::{User, UserRole};

use super::base::{BaseDao, DaoError, DaoResult};

pub struct UserDao {
    pub base: BaseDao<User>,
}

impl UserDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, User::COLLECTION),
        }
    }

    /// Create a user. Role is fixed here and never changes afterwards;
    /// exactly one of college_id / investor_id must match the role
    /// (enforced before this is called).
    pub async fn create(
        &self,
        email: String,
        display_name: String,
        role: UserRole,
        college_id: Option<String>,
        investor_id: Option<String>,
        password_hash: String,
    ) -> DaoResult<User> {
        let now = DateTime::now();
        let user = User {
            id: None,
            email,
            display_name,
            role,
            college_id,
            investor_id,
            password_hash: Some(password_hash),
            created_at: now,
            updated_at: now,
        };

        let id = self.base.insert_one(&user).await?;
        self.base.find_by_id(id).await
    }

    pub async fn find_by_email(&self, email: &str) -> DaoResult<User> {
        self.base
            .find_one(doc! { "email": email })
            .await?
            .ok_or(DaoError::NotFound)
    }

    pub async fn list(&self) -> DaoResult<Vec<User>> {
        self.base
            .find_many(doc! {}, Some(doc! { "created_at": -1 }))
            .await
    }

    pub async fn count_all(&self) -> DaoResult<u64> {
        self.base.count(doc! {}).await
    }
}
