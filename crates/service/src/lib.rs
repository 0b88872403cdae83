//! Service layer for flight records on top of `models`.
//! - `db`: SeaORM access functions, one per store operation.
//! - `flight`: the store trait and the flight service.

pub mod errors;
pub mod db;
pub mod flight;
#[cfg(test)]
pub mod test_support;
