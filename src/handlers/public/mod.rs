// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Security Level: None
// Middleware: trace and CORS layers only

pub mod auth;
pub mod service;

pub use auth::*;
