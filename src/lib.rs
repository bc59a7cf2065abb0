pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::DirectiveConfig};
pub use crate::core::{
    engine::PruneEngine,
    pipeline::ManifestPipeline,
    remover::{get_items, plan_removal, prune_manifest, remove_fields},
};
pub use domain::model::{DocumentReport, PruneResult, RemovalDirective};
pub use utils::error::{PruneError, Result};
