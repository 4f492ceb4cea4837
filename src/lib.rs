//! Cistern: the thin data layer for columnar databases.
//!
//! Define models once, let the layer render `CREATE TABLE`, `SELECT`,
//! `INSERT` and `ALTER TABLE` text, and hand finished statements to the
//! [`Client`] of your choice. Everything is re-exported from
//! [`cistern_core`].

pub use cistern_core::*;
