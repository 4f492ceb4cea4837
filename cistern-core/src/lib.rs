//! Core of the Cistern data layer.
//!
//! Everything lives here: the model registry, the query builder, SQL
//! rendering and the [`Client`] seam a backend implements. The `cistern`
//! crate re-exports this whole surface.

mod client;
mod config;
mod data_type;
mod error;
mod executor;
mod filter;
mod join;
mod orm;
mod registry;
mod row;
mod schema;
mod select;
mod sql_writer;
mod util;
mod value;

pub use client::*;
pub use config::*;
pub use data_type::*;
pub use error::*;
pub use executor::*;
pub use filter::*;
pub use join::*;
pub use orm::*;
pub use registry::*;
pub use row::*;
pub use schema::*;
pub use select::*;
pub use sql_writer::*;
pub use util::*;
pub use value::*;

pub type Result<T> = core::result::Result<T, Error>;
