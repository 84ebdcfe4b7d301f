//! Configuration modules for the Learnhub API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables:
//!
//! - [`cors`]: CORS allowed origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: JWT signing configuration

pub mod cors;
pub mod database;
pub mod jwt;
