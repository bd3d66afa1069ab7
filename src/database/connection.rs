//! Conexión a SQLite
//!
//! Este módulo posee el pool de conexiones y el paso de creación del schema.
//! El pool se crea una vez al arrancar el proceso y se cierra al apagarlo.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::config::DatabaseConfig;

/// Schema de la tabla `vehicle`.
///
/// SQLite no aplica el ancho de `VARCHAR`, por eso los límites de longitud
/// van también como `CHECK`.
const CREATE_VEHICLE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS vehicle (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        model VARCHAR(120) NOT NULL CHECK (length(model) <= 120),
        owner VARCHAR(120) NOT NULL CHECK (length(owner) <= 120),
        registration_number VARCHAR(50) NOT NULL UNIQUE CHECK (length(registration_number) <= 50),
        is_active BOOLEAN NOT NULL DEFAULT 1
    )
"#;

/// Conexión a la base de datos inyectada en el resto de la aplicación
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Abrir el pool y asegurar que el schema existe
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        info!("🗄️ Conectando a la base de datos: {}", config.url);
        let pool = config.create_pool().await?;
        let connection = Self { pool };
        connection.run_migrations().await?;
        Ok(connection)
    }

    /// Base de datos en memoria con el schema ya creado
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        Self::new(&DatabaseConfig::in_memory()).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Crear la tabla si no existe; seguro de ejecutar varias veces
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_VEHICLE_TABLE).execute(&self.pool).await?;
        debug!("✅ Schema de vehicle verificado");
        Ok(())
    }

    /// Cerrar todas las conexiones del pool
    pub async fn close(&self) {
        self.pool.close().await;
        info!("🔌 Pool de base de datos cerrado");
    }
}
