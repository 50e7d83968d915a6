#![warn(clippy::nursery, clippy::pedantic, clippy::all)]
#![cfg_attr(feature = "nightly", feature(try_trait_v2))]

pub mod errors;
pub mod result;

pub use errors::{Error, ErrorKind};
pub use result::Result::{self, Failure, Success};
