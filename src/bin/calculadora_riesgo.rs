//! Calculadora de riesgo de Cobranza360
//!
//! Recorre la tabla de deudores, calcula el puntaje de riesgo de cada uno y
//! actualiza su prioridad. Es el proceso externo que alimenta la columna
//! `prioridad_calculada`; el panel web nunca la escribe.
//!
//! Puntaje:
//! - Monto de deuda (30%): más deuda, más prioridad
//! - Días de retraso (50%): más retraso, más prioridad
//! - Historial de pago (20%): según el retraso acumulado
//!
//! Niveles: Alta (>= 70), Media (>= 40), Baja (< 40)

use anyhow::Result;
use dotenvy::dotenv;
use rust_decimal::prelude::ToPrimitive;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Deuda a partir de la cual el componente de monto satura
const MONTO_MAXIMO: f64 = 50_000.0;

/// Retraso a partir del cual el componente de días satura
const DIAS_MAXIMO: f64 = 180.0;

#[derive(Debug, sqlx::FromRow)]
struct DeudorRiesgo {
    id: i32,
    nombre: String,
    monto_deuda: sqlx::types::Decimal,
    dias_retraso: i32,
}

#[derive(Debug, sqlx::FromRow)]
struct ResumenPrioridad {
    prioridad_calculada: Option<String>,
    cantidad: i64,
    deuda_total: sqlx::types::Decimal,
}

/// Puntaje de riesgo (0-100) en función del monto y los días de retraso
fn calcular_puntaje(monto_deuda: f64, dias_retraso: i32) -> f64 {
    let puntaje_deuda = (monto_deuda / MONTO_MAXIMO * 100.0).min(100.0) * 0.30;
    let puntaje_retraso = (dias_retraso as f64 / DIAS_MAXIMO * 100.0).min(100.0) * 0.50;

    let puntaje_historial = if dias_retraso == 0 {
        0.0
    } else if dias_retraso <= 30 {
        10.0
    } else if dias_retraso <= 60 {
        15.0
    } else {
        20.0
    };

    let total = puntaje_deuda + puntaje_retraso + puntaje_historial;
    (total * 100.0).round() / 100.0
}

/// Nivel de prioridad según el puntaje
fn nivel_prioridad(puntaje: f64) -> &'static str {
    if puntaje >= 70.0 {
        "Alta"
    } else if puntaje >= 40.0 {
        "Media"
    } else {
        "Baja"
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("📊 Cobranza360 - Calculadora de riesgo");
    info!("======================================");

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL debe estar definida"))?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    info!("✅ Conectado a la base de datos");

    actualizar_prioridades(&pool).await?;

    pool.close().await;
    info!("👋 Conexión cerrada");
    Ok(())
}

/// Calcular el puntaje de cada deudor y escribir su prioridad en una sola
/// transacción.
async fn actualizar_prioridades(pool: &PgPool) -> Result<()> {
    let deudores = sqlx::query_as::<_, DeudorRiesgo>(
        "SELECT id, nombre, monto_deuda, dias_retraso FROM deudores",
    )
    .fetch_all(pool)
    .await?;

    info!("📊 Procesando {} deudores...", deudores.len());

    let mut tx = pool.begin().await?;
    for deudor in &deudores {
        let puntaje = calcular_puntaje(
            deudor.monto_deuda.to_f64().unwrap_or(0.0),
            deudor.dias_retraso,
        );
        let prioridad = nivel_prioridad(puntaje);

        sqlx::query("UPDATE deudores SET prioridad_calculada = $2 WHERE id = $1")
            .bind(deudor.id)
            .bind(prioridad)
            .execute(&mut *tx)
            .await?;

        info!(
            "ID: {:2} | {:25} | Deuda: ${:10.2} | Días: {:3} | Score: {:5.2} | Prioridad: {}",
            deudor.id, deudor.nombre, deudor.monto_deuda, deudor.dias_retraso, puntaje, prioridad
        );
    }
    tx.commit().await?;

    info!("✅ {} deudores actualizados", deudores.len());

    let resumen = sqlx::query_as::<_, ResumenPrioridad>(
        r#"
        SELECT prioridad_calculada,
               COUNT(*) AS cantidad,
               COALESCE(SUM(monto_deuda), 0) AS deuda_total
        FROM deudores
        GROUP BY prioridad_calculada
        ORDER BY CASE prioridad_calculada
            WHEN 'Alta' THEN 1
            WHEN 'Media' THEN 2
            WHEN 'Baja' THEN 3
            ELSE 4
        END
        "#,
    )
    .fetch_all(pool)
    .await?;

    info!("RESUMEN POR PRIORIDAD");
    for fila in &resumen {
        info!(
            "{:10} | Cantidad: {:2} | Deuda Total: ${:.2}",
            fila.prioridad_calculada.as_deref().unwrap_or("Pendiente"),
            fila.cantidad,
            fila.deuda_total
        );
    }

    Ok(())
}
