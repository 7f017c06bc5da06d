// Browser automation layer: session lifecycle and element queries

pub mod query;
pub mod session;
