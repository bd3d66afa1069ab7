use crate::models::vehicle::Vehicle;
use crate::utils::errors::{conflict_error, vehicle_not_found, AppError};
use sqlx::error::ErrorKind;
use sqlx::SqlitePool;

// Cada operación es una sola sentencia, con autocommit del motor.
#[derive(Clone)]
pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        model: &str,
        owner: &str,
        registration_number: &str,
        is_active: bool,
    ) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO vehicle (model, owner, registration_number, is_active)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(model)
        .bind(owner)
        .bind(registration_number)
        .bind(is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, registration_number))?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "SELECT id, model, owner, registration_number, is_active FROM vehicle WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT id, model, owner, registration_number, is_active FROM vehicle ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn update(
        &self,
        id: i64,
        model: &str,
        owner: &str,
        registration_number: &str,
        is_active: bool,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE vehicle
            SET model = ?2, owner = ?3, registration_number = ?4, is_active = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(model)
        .bind(owner)
        .bind(registration_number)
        .bind(is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, registration_number))?;

        if result.rows_affected() == 0 {
            return Err(vehicle_not_found());
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicle WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(vehicle_not_found());
        }
        Ok(())
    }
}

/// Traducir violaciones de constraints del motor a errores de dominio
fn map_write_error(e: sqlx::Error, registration_number: &str) -> AppError {
    if let sqlx::Error::Database(db_error) = &e {
        match db_error.kind() {
            ErrorKind::UniqueViolation => {
                return conflict_error("Vehicle", "registration_number", registration_number);
            }
            ErrorKind::CheckViolation => {
                return AppError::BadRequest(
                    "Vehicle field exceeds its maximum length".to_string(),
                );
            }
            ErrorKind::NotNullViolation => {
                return AppError::BadRequest("Vehicle field must not be null".to_string());
            }
            _ => {}
        }
    }
    AppError::Database(e)
}
