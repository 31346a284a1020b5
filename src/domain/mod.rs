//! Domain types: amounts, maturity periods, rates, requests and results,
//! plus the storage port the application layer depends on.

pub mod money;
pub mod mortgage;
pub mod ports;
pub mod rate;
