//! # nestrank API
//!
//! REST surface for the nestrank housing service.
//!
//! One data route: `GET /houses` with the optional `checkStores`,
//! `checkTransit`, and `checkParks` flags, responding with
//! `{ "housingData": [ ... ] }` ordered by the ranking engine. CORS is
//! permissive so browser frontends can call the API directly.

pub mod rest;

pub use rest::RestApi;
