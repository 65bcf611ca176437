//! Behavioural patterns: how objects divide up work.

pub mod visitor;
