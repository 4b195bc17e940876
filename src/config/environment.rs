//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

use crate::utils::errors::{AppError, AppResult};

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl EnvironmentConfig {
    /// Leer la configuración desde variables de entorno, con valores por
    /// defecto de desarrollo.
    pub fn from_env() -> AppResult<Self> {
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse().map_err(|_| {
            AppError::Configuration(format!("PORT debe ser un número válido: {}", port))
        })?;

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|valor| {
                    valor
                        .split(',')
                        .map(|origen| origen.trim().to_string())
                        .filter(|origen| !origen.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
