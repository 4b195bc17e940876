//! Controlador de deudores
//!
//! Las tres operaciones del panel viven acá. Ningún fallo de base de datos
//! sale de este controlador como error: se registra con contexto y se
//! degrada a una respuesta con `success: false` y mensaje genérico.

use std::cmp::Reverse;

use sqlx::PgPool;
use tracing::{error, info, warn};

use crate::dto::deudor_dto::{
    ActualizarEstadoResponse, ApiResponse, DeudorResponse, EstadisticasResponse,
};
use crate::models::deudor::Deudor;
use crate::repositories::deudor_repository::DeudorRepository;

// Mensajes visibles al operador; el detalle del error queda solo en el log
const MSG_ERROR_CARGA: &str =
    "Error al cargar los datos. Por favor, verifica la conexión a la base de datos.";
const MSG_ESTADO_ACTUALIZADO: &str = "Estado actualizado correctamente";
const MSG_DEUDOR_NO_ENCONTRADO: &str = "No se encontró el deudor";
const MSG_ERROR_ACTUALIZACION: &str = "Error al actualizar el estado";
const MSG_ERROR_ESTADISTICAS: &str = "Error al obtener las estadísticas";

pub struct DeudorController {
    repository: DeudorRepository,
}

impl DeudorController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DeudorRepository::new(pool),
        }
    }

    /// Listar todos los deudores en el orden fijo de prioridad.
    /// Ante un fallo de lectura devuelve la lista vacía con indicador de error.
    pub async fn listar(&self) -> ApiResponse<Vec<DeudorResponse>> {
        match self.repository.find_all().await {
            Ok(mut deudores) => {
                ordenar_por_prioridad(&mut deudores);
                info!("✅ {} deudores cargados correctamente", deudores.len());
                ApiResponse::success(deudores.into_iter().map(DeudorResponse::from).collect())
            }
            Err(e) => {
                error!("❌ Error cargando deudores: {}", e);
                ApiResponse::degraded(Vec::new(), MSG_ERROR_CARGA.to_string())
            }
        }
    }

    /// Actualizar el estado de gestión de un deudor. El texto del estado se
    /// acepta tal cual llega; no se valida contra el conjunto conocido.
    pub async fn actualizar_estado(&self, id: i32, estado: &str) -> ActualizarEstadoResponse {
        match self.repository.update_estado(id, estado).await {
            Ok(filas) => resultado_actualizacion(id, estado, filas),
            Err(e) => {
                error!("❌ Error actualizando estado del deudor {}: {}", id, e);
                ActualizarEstadoResponse {
                    success: false,
                    message: MSG_ERROR_ACTUALIZACION.to_string(),
                }
            }
        }
    }

    /// Estadísticas agregadas del panel. Devuelve el mensaje de error
    /// genérico cuando la lectura falla.
    pub async fn estadisticas(&self) -> Result<EstadisticasResponse, String> {
        match self.repository.estadisticas().await {
            Ok(fila) => Ok(EstadisticasResponse {
                total_deudores: fila.total_deudores,
                deuda_total: fila.deuda_total,
                prioridad_alta: fila.prioridad_alta,
                prioridad_media: fila.prioridad_media,
                prioridad_baja: fila.prioridad_baja,
            }),
            Err(e) => {
                error!("❌ Error obteniendo estadísticas: {}", e);
                Err(MSG_ERROR_ESTADISTICAS.to_string())
            }
        }
    }
}

/// Orden del listado: rango de prioridad según la lista fija, luego días de
/// retraso descendente, luego monto de deuda descendente.
pub fn ordenar_por_prioridad(deudores: &mut [Deudor]) {
    deudores.sort_by_key(|d| {
        (
            d.rango_prioridad(),
            Reverse(d.dias_retraso),
            Reverse(d.monto_deuda),
        )
    });
}

/// Mapear la cantidad de filas afectadas al resultado de la operación.
/// Más de una fila indica una violación de la clave primaria.
fn resultado_actualizacion(id: i32, estado: &str, filas: u64) -> ActualizarEstadoResponse {
    match filas {
        1 => {
            info!("✅ Estado del deudor {} actualizado a '{}'", id, estado);
            ActualizarEstadoResponse {
                success: true,
                message: MSG_ESTADO_ACTUALIZADO.to_string(),
            }
        }
        0 => {
            warn!("⚠️ Deudor {} no encontrado al actualizar estado", id);
            ActualizarEstadoResponse {
                success: false,
                message: MSG_DEUDOR_NO_ENCONTRADO.to_string(),
            }
        }
        n => {
            error!(
                "❌ La actualización del deudor {} afectó {} filas; se esperaba una sola",
                id, n
            );
            ActualizarEstadoResponse {
                success: false,
                message: MSG_ERROR_ACTUALIZACION.to_string(),
            }
        }
    }
}
