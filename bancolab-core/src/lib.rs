//! Bancolab Core — dataset records, loading, normalization, derived aggregates.
//!
//! This crate contains everything the dashboard reads:
//! - Fixed-schema record types for each dataset (prices, financials,
//!   emissions, ratings, risks, volatility, GAR)
//! - Delimited-text loading with locale-aware numeric coercion
//!   (decimal comma, percent suffixes, "ND" sentinel)
//! - Derived tables: weighted GAR, mean ROE, annual stock returns
//! - Read-only query views and the bank color palette contract

pub mod aggregate;
pub mod data;
pub mod domain;
pub mod palette;
pub mod views;
