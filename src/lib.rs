#![doc = "The `jobhive` library crate."]
#![doc = ""]
#![doc = "This crate contains the application assembler, configuration, domain models,"]
#![doc = "authentication mechanisms, routing configuration, and error handling for the"]
#![doc = "JobHive backend. It is used by the main binary (`main.rs`) to construct and"]
#![doc = "run the application."]

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;

pub use crate::app::{assemble, configure, AppState};
pub use crate::config::Config;
pub use crate::error::AppError;
