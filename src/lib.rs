//! # Design Patterns
//!
//! Classic object-oriented design patterns, each as a small module with a
//! runnable demo binary.
//!
//! ## Patterns Covered
//!
//! 1. **Creational** - Builder, Factory, Prototype
//! 2. **Structural** - Adapter, Bridge, Composite, Decorator, Facade,
//!    Flyweight, Proxy
//! 3. **Behavioural** - Visitor
//!
//! The Flyweight module is the largest: a registry that builds one shared
//! sprite per bullet kind and hands out lightweight bullets referencing it.
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin flyweight
//! cargo run --bin decorator
//! RUST_LOG=debug cargo run --bin flyweight   # trace events on stderr
//! ```
//!
//! Every demo writes to a caller-supplied `Write` sink, so tests can capture
//! the exact output.

pub mod behavioural;
pub mod creational;
pub mod error;
pub mod structural;
pub mod telemetry;

pub use error::{PatternError, Result};
