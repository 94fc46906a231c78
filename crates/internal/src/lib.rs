//! Internal utilities shared by the ntruenc crates

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice, ct_select};
