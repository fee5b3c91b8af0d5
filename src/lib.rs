pub mod adapters;
pub mod application;
pub mod common;
pub mod config;
pub mod domains;

pub use config::Config;

pub use common::{ApplicationError, ApplicationResult, DomainError, DomainResult};
pub use domains::*;
