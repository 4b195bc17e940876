use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::deudor::{normalizar_estado, normalizar_prioridad, Deudor};
use crate::utils::errors::AppResult;

// Fila cruda de la tabla deudores; prioridad y estado pueden venir NULL
#[derive(Debug, sqlx::FromRow)]
struct DeudorRow {
    id: i32,
    nombre: String,
    monto_deuda: sqlx::types::Decimal,
    dias_retraso: i32,
    prioridad_calculada: Option<String>,
    estado_gestion: Option<String>,
    fecha_registro: Option<DateTime<Utc>>,
}

impl From<DeudorRow> for Deudor {
    fn from(fila: DeudorRow) -> Self {
        Self {
            id: fila.id,
            nombre: fila.nombre,
            monto_deuda: fila.monto_deuda,
            dias_retraso: fila.dias_retraso,
            prioridad_calculada: normalizar_prioridad(fila.prioridad_calculada),
            estado_gestion: normalizar_estado(fila.estado_gestion),
            fecha_registro: fila.fecha_registro,
        }
    }
}

/// Agregados del panel de estadísticas
#[derive(Debug, sqlx::FromRow)]
pub struct EstadisticasRow {
    pub total_deudores: i64,
    pub deuda_total: sqlx::types::Decimal,
    pub prioridad_alta: i64,
    pub prioridad_media: i64,
    pub prioridad_baja: i64,
}

pub struct DeudorRepository {
    pool: PgPool,
}

impl DeudorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Leer todos los deudores. La normalización de campos NULL ocurre aquí,
    /// al momento de la lectura.
    pub async fn find_all(&self) -> AppResult<Vec<Deudor>> {
        let filas = sqlx::query_as::<_, DeudorRow>(
            r#"
            SELECT id, nombre, monto_deuda, dias_retraso,
                   prioridad_calculada, estado_gestion, fecha_registro
            FROM deudores
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(filas.into_iter().map(Deudor::from).collect())
    }

    /// Actualizar el estado de gestión de un solo deudor.
    /// Devuelve la cantidad de filas afectadas (0 o 1 con el schema sano).
    pub async fn update_estado(&self, id: i32, estado: &str) -> AppResult<u64> {
        let resultado = sqlx::query("UPDATE deudores SET estado_gestion = $2 WHERE id = $1")
            .bind(id)
            .bind(estado)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected())
    }

    /// Agregados del panel en una sola lectura. Las prioridades fuera de los
    /// tres niveles reconocidos cuentan en el total y en la suma, pero en
    /// ningún bucket.
    pub async fn estadisticas(&self) -> AppResult<EstadisticasRow> {
        let fila = sqlx::query_as::<_, EstadisticasRow>(
            r#"
            SELECT
                COUNT(*) AS total_deudores,
                COALESCE(SUM(monto_deuda), 0) AS deuda_total,
                COUNT(*) FILTER (WHERE prioridad_calculada = 'Alta') AS prioridad_alta,
                COUNT(*) FILTER (WHERE prioridad_calculada = 'Media') AS prioridad_media,
                COUNT(*) FILTER (WHERE prioridad_calculada = 'Baja') AS prioridad_baja
            FROM deudores
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(fila)
    }
}
