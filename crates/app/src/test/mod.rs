//! Shared test infrastructure.


pub use db::TestDb;
