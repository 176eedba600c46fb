//! Candle ritual domain module.
//!
//! - `repository`: the `FlagStore` trait the ritual persists through
//! - `memory`: `InMemoryFlagStore`
//! - `service`: `CandleRitual` and its outcomes

mod memory;
mod repository;
mod service;

pub use memory::InMemoryFlagStore;
pub use repository::FlagStore;
pub use service::{CandleRitual, OverlayCue, RitualOutcome};
