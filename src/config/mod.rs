pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::toml_config::DirectiveConfig;
    use crate::core::ConfigProvider;
    use crate::domain::model::RemovalDirective;
    use crate::utils::error::{PruneError, Result};
    use crate::utils::validation::{validate_directive, validate_not_empty, validate_path, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "manifest-prune")]
    #[command(about = "Strip keys from nested sections of multi-document Kubernetes manifests")]
    pub struct CliConfig {
        /// Manifest file to read
        #[arg(short, long)]
        pub input: String,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        pub output: Option<String>,

        /// TOML file with [[directives]] entries
        #[arg(short, long)]
        pub config: Option<String>,

        /// Path of the mapping for the inline directive, e.g. metadata,annotations
        #[arg(long, value_delimiter = ',')]
        pub path: Vec<String>,

        /// Keys to remove for the inline directive
        #[arg(long, value_delimiter = ',')]
        pub keys: Vec<String>,

        /// Print what would be removed as JSON, write nothing
        #[arg(long)]
        pub dry_run: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(skip)]
        #[serde(default)]
        pub directives: Vec<RemovalDirective>,
    }

    impl CliConfig {
        /// 合併指令檔與命令列上的指令，檔案中的指令在前
        pub fn resolve_directives(&mut self) -> Result<()> {
            if let Some(config_path) = &self.config {
                let file = DirectiveConfig::from_file(config_path)?;
                file.validate()?;
                tracing::debug!(
                    "Loaded {} directives from {}",
                    file.directives.len(),
                    config_path
                );
                self.directives.extend(file.directives);
            }

            if !self.keys.is_empty() {
                self.directives.push(RemovalDirective {
                    path: self.path.clone(),
                    keys: self.keys.clone(),
                });
            } else if !self.path.is_empty() {
                return Err(PruneError::InvalidConfigValueError {
                    field: "keys".to_string(),
                    value: self.path.join("."),
                    reason: "--path requires --keys".to_string(),
                });
            }

            Ok(())
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("input", &self.input)?;
            if let Some(output) = &self.output {
                validate_path("output", output)?;
            }
            validate_not_empty("directives", &self.directives)?;
            for (index, directive) in self.directives.iter().enumerate() {
                validate_directive(&format!("directives[{}]", index), directive)?;
            }
            Ok(())
        }
    }

    impl ConfigProvider for CliConfig {
        fn manifest_path(&self) -> &str {
            &self.input
        }

        fn output_path(&self) -> Option<&str> {
            self.output.as_deref()
        }

        fn directives(&self) -> &[RemovalDirective] {
            &self.directives
        }
    }

}
