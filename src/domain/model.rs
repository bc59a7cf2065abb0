use serde::{Deserialize, Serialize};

/// 刪除指令：沿 `path` 找到 mapping，再刪除其中的 `keys`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalDirective {
    #[serde(default)]
    pub path: Vec<String>,
    pub keys: Vec<String>,
}

impl RemovalDirective {
    pub fn new<P, K>(path: P, keys: K) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Dotted form of the path for logs; the root is shown as `.`
    pub fn describe_path(&self) -> String {
        if self.path.is_empty() {
            ".".to_string()
        } else {
            self.path.join(".")
        }
    }

    pub fn qualified_key(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path.join("."), key)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    pub index: usize,
    pub kind: Option<String>,
    pub name: Option<String>,
    pub removed: Vec<String>,
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PruneResult {
    pub manifest: String,
    pub documents: Vec<DocumentReport>,
}

impl PruneResult {
    pub fn removed_count(&self) -> usize {
        self.documents.iter().map(|doc| doc.removed.len()).sum()
    }
}
