//! Postgres access for the probe

pub mod pool;

pub use pool::connect;
