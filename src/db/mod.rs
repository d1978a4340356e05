//! Database module for MongoDB persistence.
//!
//! MongoDB is the source of truth for all site content.

#[cfg(test)]
pub mod memory;
mod store;

pub use store::*;

use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

const APP_NAME: &str = "profile-cms-backend";

/// Connect to the store and select the configured database.
///
/// The returned client owns the connection pool; the caller shuts it down on exit.
pub async fn connect(
    mongo_url: &str,
    db_name: &str,
) -> Result<(Client, Database), mongodb::error::Error> {
    let mut options = ClientOptions::parse(mongo_url).await?;
    options.app_name = Some(APP_NAME.to_string());

    let client = Client::with_options(options)?;
    let db = client.database(db_name);

    Ok((client, db))
}
