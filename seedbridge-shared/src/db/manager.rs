//! Database reset/seed manager
//!
//! This module provides the two side-effecting operations an end-to-end test
//! harness needs between tests: emptying every collection in the target
//! database, and inserting one user document.
//!
//! A [`DatabaseManager`] is created fresh for every invocation and dropped
//! when the invocation completes. Connections are deliberately not pooled or
//! reused: each test-setup call must stay independently retriable across an
//! unbounded number of test runs, and none of this runs on a hot path.
//!
//! # Example
//!
//! ```no_run
//! use seedbridge_shared::db::DatabaseManager;
//! use mongodb::bson::doc;
//!
//! # async fn example() -> Result<(), seedbridge_shared::db::DbError> {
//! let manager = DatabaseManager::connect("mongodb://localhost:27017/app_test").await?;
//!
//! // Wipe everything, then seed one user.
//! manager.clear().await?;
//! let id = manager
//!     .populate_with_user(doc! { "name": "Alice", "email": "alice@example.com" })
//!     .await?;
//! println!("Seeded user {}", id);
//! # Ok(())
//! # }
//! ```

use futures::future::try_join_all;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::SeedUser;

/// Database reset/seed error
#[derive(Debug, Error)]
pub enum DbError {
    /// The connection URL is malformed or the host is unreachable
    #[error("cannot connect to database at {url}")]
    Connection {
        url: String,
        #[source]
        source: mongodb::error::Error,
    },

    /// The connection URL does not name a default database
    #[error("connection URL {url} does not name a database")]
    MissingDatabase { url: String },

    /// Enumerating the database's collections failed
    #[error("failed to enumerate collections")]
    ListCollections(#[source] mongodb::error::Error),

    /// At least one per-collection deletion failed (first failure reported)
    #[error("failed to clear collection {collection}")]
    Clear {
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },

    /// The document was rejected or the connection was lost mid-insert
    #[error("failed to insert into {collection}")]
    Insert {
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },
}

/// Per-invocation handle to the database named by a connection URL
///
/// Owns a client bound to the URL's default database. Dropping the manager
/// releases the connection; there is no explicit close.
pub struct DatabaseManager {
    db: Database,
}

impl DatabaseManager {
    /// Connects to the database named by `url`
    ///
    /// The URL must include a database name in its path, e.g.
    /// `mongodb://localhost:27017/app_test`. The driver connects lazily, so
    /// a `ping` is issued here to surface unreachable hosts at connect time
    /// rather than on first use.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Connection`] if the URL is malformed or the host
    /// does not respond, and [`DbError::MissingDatabase`] if the URL names
    /// no database. Failures are not retried internally.
    pub async fn connect(url: &str) -> Result<Self, DbError> {
        let options = ClientOptions::parse(url)
            .await
            .map_err(|source| DbError::Connection {
                url: url.to_string(),
                source,
            })?;

        let client = Client::with_options(options).map_err(|source| DbError::Connection {
            url: url.to_string(),
            source,
        })?;

        let db = client
            .default_database()
            .ok_or_else(|| DbError::MissingDatabase {
                url: url.to_string(),
            })?;

        // The driver connects lazily; fail now if the host is unreachable.
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| DbError::Connection {
                url: url.to_string(),
                source,
            })?;

        debug!(db = %db.name(), "connected to database");
        Ok(DatabaseManager { db })
    }

    /// Returns the name of the bound database
    pub fn database_name(&self) -> &str {
        self.db.name()
    }

    /// Deletes every document from every collection in the bound database
    ///
    /// Collections are enumerated dynamically, so the operation covers any
    /// collection the application adds later. Deletions run concurrently and
    /// the call resolves only once all of them have completed. Collections
    /// themselves (and their indexes) are left in place, so the set of
    /// collection names is unchanged afterwards. Clearing an already-empty
    /// database is a no-op that succeeds.
    ///
    /// `system.*` namespaces are skipped; they reject writes.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Clear`] naming the first collection whose deletion
    /// failed. Other deletions may already have taken effect; there is no
    /// multi-collection transaction to roll back.
    pub async fn clear(&self) -> Result<(), DbError> {
        let names = self
            .db
            .list_collection_names()
            .await
            .map_err(DbError::ListCollections)?;

        let deletions = names
            .iter()
            .filter(|name| !name.starts_with("system."))
            .map(|name| {
                let collection = self.db.collection::<Document>(name);
                let name = name.clone();
                async move {
                    let result =
                        collection
                            .delete_many(doc! {})
                            .await
                            .map_err(|source| DbError::Clear {
                                collection: name.clone(),
                                source,
                            })?;
                    debug!(collection = %name, deleted = result.deleted_count, "cleared collection");
                    Ok::<_, DbError>(())
                }
            });

        try_join_all(deletions).await?;

        info!(db = %self.db.name(), collections = names.len(), "database cleared");
        Ok(())
    }

    /// Inserts exactly one document into the `users` collection
    ///
    /// The document is passed through verbatim: no fields are validated,
    /// defaulted, or dropped, and no dedup is performed. Inserting the same
    /// document twice stores two documents. Uniqueness, if any, is the
    /// database's concern.
    ///
    /// Returns the generated `_id` of the inserted document.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Insert`] if the database rejects the document or
    /// the connection is lost mid-insert.
    pub async fn populate_with_user(&self, document: Document) -> Result<Bson, DbError> {
        let collection = self.db.collection::<Document>(SeedUser::COLLECTION);

        let result = collection
            .insert_one(document)
            .await
            .map_err(|source| DbError::Insert {
                collection: SeedUser::COLLECTION.to_string(),
                source,
            })?;

        debug!(id = %result.inserted_id, "seeded user document");
        Ok(result.inserted_id)
    }
}
