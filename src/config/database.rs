//! Database configuration module.
//!
//! This module opens the SeaORM connection pool and creates the tables the hotel
//! endpoints read from. Table definitions come from the entity models through
//! `Schema::create_table_from_entity`, so the schema always matches the Rust
//! structs without hand-written SQL.

use crate::config::DatabaseConfig;
use crate::entities::{Enrollment, Hotel, Room, Session, Ticket, TicketType, User};
use crate::errors::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema,
};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Establishes a connection pool to the configured database.
///
/// SQL statement logging from sqlx stays on; filter it with `RUST_LOG`.
#[instrument(skip(cfg), fields(url = %cfg.url))]
pub async fn create_connection(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .sqlx_logging(true);

    let db = Database::connect(options).await?;
    info!("Database connection established");
    Ok(db)
}

/// Creates all tables that do not exist yet, parents before children.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    create_table(db, User).await?;
    create_table(db, Session).await?;
    create_table(db, Enrollment).await?;
    create_table(db, TicketType).await?;
    create_table(db, Ticket).await?;
    create_table(db, Hotel).await?;
    create_table(db, Room).await?;
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    debug!("Ensuring table {}", entity.table_name());
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(builder.build(&statement)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{HotelModel, RoomModel, TicketModel};
    use sea_orm::QuerySelect;

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<HotelModel> = Hotel::find().limit(1).all(&db).await?;
        let _: Vec<RoomModel> = Room::find().limit(1).all(&db).await?;
        let _: Vec<TicketModel> = Ticket::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_connection_from_config() -> Result<()> {
        let cfg = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connect_timeout_secs: 1,
        };
        let db = create_connection(&cfg).await?;
        create_tables(&db).await?;
        db.ping().await?;
        Ok(())
    }
}
