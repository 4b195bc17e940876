//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de error internos del sistema. Las tres
//! operaciones del panel nunca propagan estos errores al cliente: el
//! controlador los registra y degrada a una respuesta con `success: false`.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
