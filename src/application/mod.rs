//! Application layer containing the mortgage evaluation use-cases.
//!
//! `pricing` holds the pure affordability and annuity rules, `engine` composes
//! them with the rate store, and `loader` seeds the store from configuration.

pub mod engine;
pub mod loader;
pub mod pricing;
