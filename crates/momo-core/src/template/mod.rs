//! Localized template store.
//!
//! - `model`: `TemplateId`, `TemplateEntry`
//! - `store`: `TemplateStore`, validated lookup table
//! - `builtin`: the shipped zh/en rows

mod builtin;
mod model;
mod store;

pub use model::{TemplateEntry, TemplateId};
pub use store::TemplateStore;
