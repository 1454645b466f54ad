//! Game implementations.

pub mod sos;
