//! Flow arrangements supported by the heat exchanger utilities.

mod cross_flow;

pub use cross_flow::{CrossFlow, MixState, Unmixed};
