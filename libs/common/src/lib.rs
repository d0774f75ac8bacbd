//! Common library for the user service
//!
//! This crate provides the infrastructure shared by the HTTP services:
//! PostgreSQL connection pooling, database configuration from the
//! environment, and the error types used by the persistence layer.

pub mod database;
pub mod error;
