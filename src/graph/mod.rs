// src/graph/mod.rs
//! Link graph model and the ranking engine built on it.

pub mod builder;
pub mod file;
mod model;
pub mod network;
pub mod rank;

pub use builder::GraphBuilder;
pub use model::Graph;
