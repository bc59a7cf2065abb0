use crate::domain::model::RemovalDirective;
use crate::utils::error::{PruneError, Result};
use crate::utils::validation::{validate_directive, validate_not_empty, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 刪除指令檔
///
/// ```toml
/// description = "strip platform bookkeeping"
///
/// [[directives]]
/// path = ["metadata", "annotations"]
/// keys = ["io.tencent.paas.creator", "io.tencent.paas.updator"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectiveConfig {
    pub description: Option<String>,
    #[serde(default)]
    pub directives: Vec<RemovalDirective>,
}

impl DirectiveConfig {
    /// 從 TOML 檔案載入指令
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PruneError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析指令
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PruneError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ANNOTATION_PREFIX})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PruneError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for DirectiveConfig {
    fn validate(&self) -> Result<()> {
        validate_not_empty("directives", &self.directives)?;
        for (index, directive) in self.directives.iter().enumerate() {
            validate_directive(&format!("directives[{}]", index), directive)?;
        }
        Ok(())
    }
}
