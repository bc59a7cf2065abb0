pub mod engine;
pub mod pipeline;
pub mod remover;

pub use crate::domain::model::{DocumentReport, PruneResult, RemovalDirective};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
