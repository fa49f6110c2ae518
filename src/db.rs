use crate::config::DatabaseConfig;
use crate::error::ApiError;
use crate::models::Note;
use crate::repository::NoteRepository;
use async_trait::async_trait;
use deadpool_postgres::{Manager, ManagerConfig, Object, Pool, RecyclingMethod, Runtime};
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use tokio_postgres::Row;
use tracing::{debug, error, info};

/// Shared handle to PostgreSQL.
///
/// Owns the deadpool `Pool`; every repository call borrows one pooled
/// connection for a single statement and hands it back.
#[derive(Clone)]
pub struct Database {
    pool: Pool,
}

impl Database {
    /// Build the pool and check that the server answers before returning.
    pub async fn new(config: DatabaseConfig) -> Result<Self, ApiError> {
        info!(
            "Creating PostgreSQL connection pool for database '{}' (max {} connections)",
            config.database_name(),
            config.max_connections
        );

        let pool = Self::create_pool(config)?;

        let db = Database { pool };
        db.test_connection().await?;

        Ok(db)
    }

    /// TLS is negotiated according to the `sslmode` of the connection string.
    fn create_pool(config: DatabaseConfig) -> Result<Pool, ApiError> {
        let tls_connector = TlsConnector::builder().build().map_err(|e| {
            error!("Failed to create TLS connector: {}", e);
            ApiError::storage(format!("TLS connector creation failed: {}", e))
        })?;
        let tls = MakeTlsConnector::new(tls_connector);

        let manager_config = ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        };
        let manager = Manager::from_config(config.pg, tls, manager_config);

        Pool::builder(manager)
            .max_size(config.max_connections)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| {
                error!("Failed to create connection pool: {}", e);
                ApiError::storage(format!("Connection pool creation failed: {}", e))
            })
    }

    async fn get_connection(&self) -> Result<Object, ApiError> {
        self.pool.get().await.map_err(ApiError::from)
    }

    pub async fn test_connection(&self) -> Result<(), ApiError> {
        let client = self.get_connection().await?;

        client.execute("SELECT 1", &[]).await.map_err(|e| {
            error!("Database connection test failed: {}", e);
            ApiError::from(e)
        })?;

        info!("Database connection test successful");
        Ok(())
    }

    /// Stop handing out connections and drop the idle ones.
    pub fn close(&self) {
        self.pool.close();
        info!("Database connection pool closed");
    }
}

fn note_from_row(row: &Row) -> Result<Note, ApiError> {
    Ok(Note {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
    })
}

#[async_trait]
impl NoteRepository for Database {
    async fn create(&self, title: &str, content: &str) -> Result<Note, ApiError> {
        let client = self.get_connection().await?;

        let query = r#"
            INSERT INTO notes (title, content)
            VALUES ($1, $2)
            RETURNING id, title, content
        "#;

        let row = client
            .query_one(query, &[&title, &content])
            .await
            .map_err(ApiError::from)?;

        let note = note_from_row(&row)?;

        info!("Created note with id: {}", note.id);
        Ok(note)
    }

    async fn list_all(&self) -> Result<Vec<Note>, ApiError> {
        let client = self.get_connection().await?;
        let query = "SELECT id, title, content FROM notes";

        let rows = client.query(query, &[]).await.map_err(ApiError::from)?;

        rows.iter().map(note_from_row).collect()
    }

    async fn get_by_id(&self, id: i32) -> Result<Note, ApiError> {
        let client = self.get_connection().await?;
        let query = "SELECT id, title, content FROM notes WHERE id = $1";

        let row = client
            .query_opt(query, &[&id])
            .await
            .map_err(ApiError::from)?;

        match row {
            Some(row) => note_from_row(&row),
            None => Err(ApiError::note_not_found(id)),
        }
    }

    async fn update(&self, id: i32, title: &str, content: &str) -> Result<(), ApiError> {
        let client = self.get_connection().await?;
        let query = "UPDATE notes SET title = $1, content = $2 WHERE id = $3";

        let rows_affected = client
            .execute(query, &[&title, &content, &id])
            .await
            .map_err(ApiError::from)?;

        if rows_affected == 0 {
            debug!("Update matched no note with id: {}", id);
            return Err(ApiError::note_not_found(id));
        }

        info!("Updated note with id: {}", id);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let client = self.get_connection().await?;
        let query = "DELETE FROM notes WHERE id = $1";

        let rows_affected = client
            .execute(query, &[&id])
            .await
            .map_err(ApiError::from)?;

        if rows_affected == 0 {
            debug!("Delete matched no note with id: {}", id);
        } else {
            info!("Deleted note with id: {}", id);
        }
        Ok(())
    }
}
