//! # RentHub API
//!
//! HTTP layer over the core services: REST routes, request/response DTOs,
//! JWT authentication middleware and domain-error mapping.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
