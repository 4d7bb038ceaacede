use mongodb::{Database, IndexModel, options::IndexOptions};
use tracing::info;

pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    // Invites
    create_indexes(
        db,
        "invites",
        vec![
            index_unique(bson::doc! { "token": 1 }),
            index(bson::doc! { "email": 1, "invited_at": -1 }),
            index(bson::doc! { "status": 1, "invited_at": -1 }),
        ],
    )
    .await?;

    // Users
    create_indexes(
        db,
        "users",
        vec![index_unique(bson::doc! { "email": 1 })],
    )
    .await?;

    // Startups are keyed by slug as _id; no secondary indexes needed for
    // lookup, only for dashboard listings.
    create_indexes(
        db,
        "startups",
        vec![index(bson::doc! { "status": 1, "created_at": -1 })],
    )
    .await?;

    // Comments
    create_indexes(
        db,
        "comments",
        vec![index(bson::doc! { "startup_slug": 1, "created_at": -1 })],
    )
    .await?;

    // Reconciliations
    create_indexes(
        db,
        "reconciliations",
        vec![index(bson::doc! { "created_at": -1 })],
    )
    .await?;

    info!("All indexes ensured");
    Ok(())
}

fn index(keys: bson::Document) -> IndexModel {
    IndexModel::builder().keys(keys).build()
}

fn index_unique(keys: bson::Document) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(true).build())
        .build()
}

async fn create_indexes(
    db: &Database,
    collection: &str,
    indexes: Vec<IndexModel>,
) -> Result<(), mongodb::error::Error> {
    db.collection::<bson::Document>(collection)
        .create_indexes(indexes)
        .await?;
    info!(collection, "Indexes created");
    Ok(())
}
