//! API layer - HTTP entry points.

pub mod cors;
pub mod http;

#[cfg(test)]
mod http_tests;
