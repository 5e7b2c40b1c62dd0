use std::sync::Arc;
use std::time::Duration;

use foodie_core::repository::DataRepository;
use foodie_core::repository::history_place_repository::HistoryPlaceRepository;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};

pub type DbConn = DatabaseConnection;

use crate::history_place::HistoryPlaceProvider;

mod entity;
mod history_place;
mod mapper;


#[derive(Clone)]
pub struct DataLayer {
    // Used for tests for now
    #[allow(unused)]
    db: DatabaseConnection,
    history_place_repository: Arc<dyn HistoryPlaceRepository>,
}

impl DataLayer {
    pub fn build(db: DatabaseConnection) -> Self {
        Self {
            history_place_repository: Arc::new(HistoryPlaceProvider { db: db.clone() }),
            db,
        }
    }
}

impl DataRepository for DataLayer {
    fn get_history_place_repository(&self) -> Arc<dyn HistoryPlaceRepository> {
        self.history_place_repository.clone()
    }
}

/// Connects to `database_url` and brings the schema up to date.
pub async fn db_conn(database_url: impl Into<String>) -> Result<DbConn, DbErr> {
    let database_url = database_url.into();
    let in_memory = database_url.contains(":memory:");

    let mut options = ConnectOptions::new(database_url);
    options
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    if in_memory {
        // every pooled connection would otherwise get its own empty database
        options.max_connections(1);
    }

    let db = sea_orm::Database::connect(options).await?;
    Migrator::up(&db, None).await?;

    tracing::info!("Database connected, migrations applied");

    Ok(db)
}
