//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS del panel.

pub mod cors;
