//! Middleware modules for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. The [`auth::AuthUser`] extractor validates the JWT and extracts claims
//! 3. Handler executes with the caller's identity attached
//!
//! Public endpoints simply omit the extractor.

pub mod auth;
