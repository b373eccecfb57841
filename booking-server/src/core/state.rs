use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::BookableKind;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{ItemRepository, SiteContentRepository};
use crate::services::{NotifyService, PaymentService};
use crate::utils::AppError;
use crate::utils::retry::with_retry;

/// Shared application state
///
/// Holds the configuration, the embedded database handle and the outbound
/// service clients. `Clone` is cheap: the database handle and the reqwest
/// clients are reference counted internally.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// Email notification client
    pub notify: NotifyService,
    /// Payment checkout client
    pub payments: PaymentService,
}

impl ServerState {
    /// Build state around an already-open database.
    ///
    /// Used by [`initialize`](Self::initialize) and by tests with an
    /// in-memory engine.
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        let notify = NotifyService::new(
            config.notify_endpoint.clone(),
            config.service_key.clone(),
        );
        let payments = PaymentService::new(
            config.payment_endpoint.clone(),
            config.service_key.clone(),
        );
        Self {
            config,
            db,
            notify,
            payments,
        }
    }

    /// Initialize the server state
    ///
    /// 1. Ensure the working directory layout exists
    /// 2. Open the embedded database (work_dir/database/site.db)
    /// 3. Warm the startup content (site content + adventures), each read
    ///    wrapped in the fixed 1s/2s/5s retry schedule. If either read
    ///    still fails, initialization reports a load error.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_dir().join("site.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        let state = Self::with_db(config.clone(), db_service.db);
        state.warm_startup_content().await?;
        Ok(state)
    }

    /// Startup content load (site content + adventures, concurrently)
    async fn warm_startup_content(&self) -> Result<(), AppError> {
        let content_repo = SiteContentRepository::new(self.db.clone());
        let adventure_repo = ItemRepository::for_kind(self.db.clone(), BookableKind::Adventure);

        let (content, adventures) = tokio::try_join!(
            with_retry("site content load", || content_repo.find_all()),
            with_retry("adventures load", || adventure_repo.find_all()),
        )?;

        tracing::info!(
            sections = content.len(),
            adventures = adventures.len(),
            "Startup content loaded"
        );
        Ok(())
    }

    /// Get a database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
