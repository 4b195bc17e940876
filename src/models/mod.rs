//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema
//! PostgreSQL y sus derivaciones puras de presentación.

pub mod deudor;
