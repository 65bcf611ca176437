//! Creational patterns: how objects get made.

pub mod builder;
pub mod factory;
pub mod prototype;
