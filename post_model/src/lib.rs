//! # Post Model
//!
//! The "data" crate of the micro-blog workspace - contains the [`Post`]
//! entity, the shared validation rules for user names and post text, and the
//! error taxonomy used across the whole network. This crate knows nothing
//! about the network itself.

pub mod error;
pub mod post;

pub use error::*;
pub use post::*;
