use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::deudor::Deudor;

// Fila del listado de deudores, con las clases de badge ya derivadas
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeudorResponse {
    pub id: i32,
    pub nombre: String,
    pub monto_deuda: Decimal,
    pub dias_retraso: i32,
    pub prioridad_calculada: String,
    pub estado_gestion: String,
    pub fecha_registro: Option<DateTime<Utc>>,
    pub priority_badge_class: &'static str,
    pub status_badge_class: &'static str,
}

impl From<Deudor> for DeudorResponse {
    fn from(deudor: Deudor) -> Self {
        let priority_badge_class = deudor.priority_badge_class();
        let status_badge_class = deudor.status_badge_class();
        Self {
            id: deudor.id,
            nombre: deudor.nombre,
            monto_deuda: deudor.monto_deuda,
            dias_retraso: deudor.dias_retraso,
            prioridad_calculada: deudor.prioridad_calculada,
            estado_gestion: deudor.estado_gestion,
            fecha_registro: deudor.fecha_registro,
            priority_badge_class,
            status_badge_class,
        }
    }
}

// Formulario de actualización de estado (campos `id` y `status` del cliente)
#[derive(Debug, Deserialize)]
pub struct ActualizarEstadoForm {
    pub id: i32,
    pub status: String,
}

// Respuesta de la actualización de estado
#[derive(Debug, Serialize)]
pub struct ActualizarEstadoResponse {
    pub success: bool,
    pub message: String,
}

// Estadísticas del panel
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstadisticasResponse {
    pub total_deudores: i64,
    pub deuda_total: Decimal,
    pub prioridad_alta: i64,
    pub prioridad_media: i64,
    pub prioridad_baja: i64,
}

// Respuesta genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Respuesta degradada: conserva un cuerpo utilizable (p. ej. lista vacía)
    /// junto con el indicador de error para el cliente.
    pub fn degraded(data: T, message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn deudor_de_prueba() -> Deudor {
        Deudor {
            id: 7,
            nombre: "María López".to_string(),
            monto_deuda: Decimal::new(35000, 2),
            dias_retraso: 12,
            prioridad_calculada: "Alta".to_string(),
            estado_gestion: "Sin Contactar".to_string(),
            fecha_registro: None,
        }
    }

    #[test]
    fn test_deudor_response_nombres_de_campo() {
        let response = DeudorResponse::from(deudor_de_prueba());
        let valor = serde_json::to_value(&response).unwrap();

        assert_eq!(valor["id"], json!(7));
        assert_eq!(valor["nombre"], json!("María López"));
        assert_eq!(valor["montoDeuda"], json!("350.00"));
        assert_eq!(valor["diasRetraso"], json!(12));
        assert_eq!(valor["prioridadCalculada"], json!("Alta"));
        assert_eq!(valor["estadoGestion"], json!("Sin Contactar"));
        assert_eq!(valor["fechaRegistro"], json!(null));
        assert_eq!(valor["priorityBadgeClass"], json!("badge-high"));
        assert_eq!(valor["statusBadgeClass"], json!("status-pending"));
    }

    #[test]
    fn test_estadisticas_response_nombres_de_campo() {
        let stats = EstadisticasResponse {
            total_deudores: 3,
            deuda_total: Decimal::new(35000, 2),
            prioridad_alta: 2,
            prioridad_media: 1,
            prioridad_baja: 0,
        };
        let valor = serde_json::to_value(&stats).unwrap();

        assert_eq!(valor["totalDeudores"], json!(3));
        assert_eq!(valor["deudaTotal"], json!("350.00"));
        assert_eq!(valor["prioridadAlta"], json!(2));
        assert_eq!(valor["prioridadMedia"], json!(1));
        assert_eq!(valor["prioridadBaja"], json!(0));
    }

    #[test]
    fn test_api_response_error_omite_data() {
        let response = ApiResponse::error("falló".to_string());
        let valor = serde_json::to_value(&response).unwrap();

        assert_eq!(valor["success"], json!(false));
        assert_eq!(valor["message"], json!("falló"));
        assert!(valor.get("data").is_none());
    }

    #[test]
    fn test_api_response_degraded_conserva_lista_vacia() {
        let response = ApiResponse::degraded(Vec::<DeudorResponse>::new(), "error".to_string());
        let valor = serde_json::to_value(&response).unwrap();

        assert_eq!(valor["success"], json!(false));
        assert_eq!(valor["data"], json!([]));
    }
}
