//! Rutas del API
//!
//! Este módulo arma los routers de Axum del panel.

pub mod deudor_routes;
