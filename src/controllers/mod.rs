//! Controladores del sistema
//!
//! Este módulo contiene los contratos de las operaciones del panel:
//! ordenamiento del listado, mapeo de resultados y política de degradación
//! ante fallos.

pub mod deudor_controller;
