//! Repositorios de acceso a datos
//!
//! Este módulo contiene el acceso SQL a la tabla de deudores.

pub mod deudor_repository;
