//! Transfinite ordinal sequence: Cantor Normal Form values, a step-indexed
//! generator, and the actor that advances it on a fixed cadence.

pub mod config;
pub mod generator;
pub mod message;
pub mod ordinal;
pub mod renderer;
pub mod routes;
pub mod sequence_actor;
pub mod sequence_ref;
pub mod snapshot;
pub mod state;
pub mod term;

#[cfg(test)]
mod proptests;
