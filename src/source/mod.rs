//! ID source module
//!
//! Two mutually exclusive ways to obtain the ID list:
//! - automatic generation through an injectable [`Sampler`],
//! - parsing of comma-separated manual input.
//!
//! The engine picks the mode from the request configuration; this module
//! only produces the list.

mod parser;
mod sampler;

pub use parser::parse_id_list;
pub use sampler::{generate_ids, RandomSampler, Sampler};
