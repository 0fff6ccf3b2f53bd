#![doc = include_str!("../README.md")]

pub mod bridge;
pub mod class_name;
pub mod error;
pub mod prelude;
pub mod result;
pub mod traits;
pub mod types;

pub(crate) mod impls;
pub(crate) mod intent;
pub(crate) mod macros;
pub(crate) mod proxy;
pub(crate) mod uri;
