//! Modelo de deudor
//!
//! Este módulo contiene el modelo de dominio del deudor, la normalización
//! de lectura de campos opcionales y las derivaciones puras de presentación.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Prioridad asignada cuando la columna viene NULL
pub const PRIORIDAD_PENDIENTE: &str = "Pendiente";

/// Estado asignado cuando la columna viene NULL
pub const ESTADO_SIN_CONTACTAR: &str = "Sin Contactar";

/// Orden fijo de prioridades para el listado: Alta -> Media -> Baja -> Pendiente.
/// Cualquier valor fuera de la lista recibe el rango siguiente al último bucket.
pub const ORDEN_PRIORIDADES: [&str; 4] = ["Alta", "Media", "Baja", PRIORIDAD_PENDIENTE];

/// Deudor del sistema de cobranza
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deudor {
    pub id: i32,
    pub nombre: String,
    pub monto_deuda: Decimal,
    pub dias_retraso: i32,
    pub prioridad_calculada: String,
    pub estado_gestion: String,
    pub fecha_registro: Option<DateTime<Utc>>,
}

impl Deudor {
    /// Rango de ordenamiento de la prioridad (posición en la lista fija)
    pub fn rango_prioridad(&self) -> usize {
        rango_prioridad(&self.prioridad_calculada)
    }

    /// Clase CSS del badge de prioridad
    pub fn priority_badge_class(&self) -> &'static str {
        priority_badge_class(&self.prioridad_calculada)
    }

    /// Clase CSS del badge de estado de gestión
    pub fn status_badge_class(&self) -> &'static str {
        status_badge_class(&self.estado_gestion)
    }
}

/// Posición de una prioridad dentro de la lista fija.
/// Los valores no reconocidos quedan al final del listado.
pub fn rango_prioridad(prioridad: &str) -> usize {
    ORDEN_PRIORIDADES
        .iter()
        .position(|p| *p == prioridad)
        .unwrap_or(ORDEN_PRIORIDADES.len())
}

/// Normalizar la prioridad leída de la base (NULL -> "Pendiente")
pub fn normalizar_prioridad(valor: Option<String>) -> String {
    valor.unwrap_or_else(|| PRIORIDAD_PENDIENTE.to_string())
}

/// Normalizar el estado de gestión leído de la base (NULL -> "Sin Contactar")
pub fn normalizar_estado(valor: Option<String>) -> String {
    valor.unwrap_or_else(|| ESTADO_SIN_CONTACTAR.to_string())
}

/// Clase CSS para el badge de prioridad
pub fn priority_badge_class(prioridad: &str) -> &'static str {
    match prioridad {
        "Alta" => "badge-high",
        "Media" => "badge-medium",
        "Baja" => "badge-low",
        _ => "badge-pending",
    }
}

/// Clase CSS para el badge de estado de gestión
pub fn status_badge_class(estado: &str) -> &'static str {
    match estado {
        "Contactado" => "status-contacted",
        "En Proceso" => "status-inprogress",
        "Pagado" => "status-paid",
        _ => "status-pending",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rango_prioridad_lista_fija() {
        assert_eq!(rango_prioridad("Alta"), 0);
        assert_eq!(rango_prioridad("Media"), 1);
        assert_eq!(rango_prioridad("Baja"), 2);
        assert_eq!(rango_prioridad("Pendiente"), 3);
    }

    #[test]
    fn test_rango_prioridad_no_reconocida_queda_al_final() {
        assert_eq!(rango_prioridad("Urgente"), ORDEN_PRIORIDADES.len());
        assert_eq!(rango_prioridad(""), ORDEN_PRIORIDADES.len());
        assert!(rango_prioridad("Desconocido") > rango_prioridad("Pendiente"));
    }

    #[test]
    fn test_normalizar_prioridad() {
        assert_eq!(normalizar_prioridad(None), "Pendiente");
        assert_eq!(normalizar_prioridad(Some("Alta".to_string())), "Alta");
    }

    #[test]
    fn test_normalizar_estado() {
        assert_eq!(normalizar_estado(None), "Sin Contactar");
        assert_eq!(normalizar_estado(Some("Pagado".to_string())), "Pagado");
    }

    #[test]
    fn test_priority_badge_class() {
        assert_eq!(priority_badge_class("Alta"), "badge-high");
        assert_eq!(priority_badge_class("Media"), "badge-medium");
        assert_eq!(priority_badge_class("Baja"), "badge-low");
        assert_eq!(priority_badge_class("Pendiente"), "badge-pending");
        assert_eq!(priority_badge_class("Desconocido"), "badge-pending");
    }

    #[test]
    fn test_status_badge_class() {
        assert_eq!(status_badge_class("Contactado"), "status-contacted");
        assert_eq!(status_badge_class("En Proceso"), "status-inprogress");
        assert_eq!(status_badge_class("Pagado"), "status-paid");
        assert_eq!(status_badge_class("Sin Contactar"), "status-pending");
        assert_eq!(status_badge_class(""), "status-pending");
    }
}
