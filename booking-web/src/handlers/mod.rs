//! HTTP handlers for the booking API.
//!
//! Handlers stay thin: decode the request, call the service, encode the
//! result. Every domain decision lives in the services.

pub mod reservations;
pub mod venues;
