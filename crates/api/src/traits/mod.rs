//! Traits implemented by schemes and their key types

pub mod pke;
pub mod serialize;

pub use pke::Pke;
pub use serialize::{Serialize, SerializeSecret};
