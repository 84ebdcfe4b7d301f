//! # Learnhub API
//!
//! A course marketplace REST API built with Rust, Axum, and PostgreSQL.
//! Instructors publish courses; students browse them; admins moderate.
//!
//! ## Overview
//!
//! - **Authentication**: stateless JWT bearer tokens (24h expiry, no refresh
//!   or revocation)
//! - **Authorization**: a closed role enum (student / teacher / admin) and a
//!   single ownership policy consulted by every mutating course endpoint
//! - **Courses**: standard CRUD with the instructor's public identity joined
//!   into read responses
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture inspired by NestJS:
//!
//! ```text
//! src/
//! ├── cli.rs            # create-admin bootstrap command
//! ├── config/           # Configuration modules (JWT, database, CORS)
//! ├── middleware/       # Auth extractor
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Signup and login
//! │   ├── courses/     # Course marketplace CRUD
//! │   └── users/       # User models
//! ├── policy.rs         # Course ownership policy
//! └── utils/            # Shared utilities (errors, jwt, password)
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: Business logic
//! - `model.rs`: Data models, DTOs, database structs
//! - `router.rs`: Axum router configuration
//!
//! ## Role semantics
//!
//! | Role | Course access |
//! |------|---------------|
//! | Admin | delete any course; update only own |
//! | Teacher | create, update, delete own courses |
//! | Student | read-only beyond own account |

pub mod cli;
pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod policy;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
