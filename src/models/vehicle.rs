//! Modelo de Vehicle
//!
//! Mapea exactamente a la tabla `vehicle` con primary key entera 'id'.

use serde::Serialize;
use sqlx::FromRow;
use std::fmt;

/// Vehicle principal - una fila de la tabla vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub model: String,
    pub owner: String,
    pub registration_number: String,
    pub is_active: bool,
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Vehicle {}, Owner: {}>", self.model, self.owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_shows_model_and_owner() {
        let vehicle = Vehicle {
            id: 1,
            model: "Lada Niva".to_string(),
            owner: "Ivan".to_string(),
            registration_number: "A123BC".to_string(),
            is_active: true,
        };
        assert_eq!(vehicle.to_string(), "<Vehicle Lada Niva, Owner: Ivan>");
    }
}
