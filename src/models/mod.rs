//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema SQLite.

pub mod vehicle;

pub use vehicle::Vehicle;
