use crate::core::remover;
use crate::core::{ConfigProvider, DocumentReport, Pipeline, PruneResult, Storage};
use crate::utils::error::{PruneError, Result};

pub struct ManifestPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ManifestPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ManifestPipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        let path = self.config.manifest_path();
        tracing::debug!("Reading manifest from: {}", path);

        let bytes = self.storage.read_file(path).await?;
        String::from_utf8(bytes).map_err(|e| PruneError::ProcessingError {
            message: format!("Manifest '{}' is not valid UTF-8: {}", path, e),
        })
    }

    async fn transform(&self, manifest: String) -> Result<PruneResult> {
        let directives = self.config.directives();
        tracing::debug!("Applying {} removal directives", directives.len());
        remover::prune_manifest(&manifest, directives)
    }

    async fn load(&self, result: &PruneResult) -> Result<Option<String>> {
        let Some(output_path) = self.config.output_path() else {
            return Ok(None);
        };

        tracing::debug!(
            "Writing pruned manifest ({} bytes) to: {}",
            result.manifest.len(),
            output_path
        );
        self.storage
            .write_file(output_path, result.manifest.as_bytes())
            .await?;

        Ok(Some(output_path.to_string()))
    }

    async fn plan(&self, manifest: &str) -> Result<Vec<DocumentReport>> {
        remover::plan_removal(manifest, self.config.directives())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RemovalDirective;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &[u8]) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), data.to_vec());
            Self {
                files: Arc::new(Mutex::new(files)),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                PruneError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        output_path: Option<String>,
        directives: Vec<RemovalDirective>,
    }

    impl ConfigProvider for MockConfig {
        fn manifest_path(&self) -> &str {
            "in.yaml"
        }

        fn output_path(&self) -> Option<&str> {
            self.output_path.as_deref()
        }

        fn directives(&self) -> &[RemovalDirective] {
            &self.directives
        }
    }

    const MANIFEST: &str = "kind: ConfigMap\nmetadata:\n  name: cfg\n  annotations:\n    a: '1'\n    b: '2'\n";

    fn config(output_path: Option<&str>) -> MockConfig {
        MockConfig {
            output_path: output_path.map(str::to_string),
            directives: vec![RemovalDirective::new(["metadata", "annotations"], ["a"])],
        }
    }

    #[tokio::test]
    async fn test_extract_transform_load() {
        let storage = MockStorage::with_file("in.yaml", MANIFEST.as_bytes());
        let pipeline = ManifestPipeline::new(storage.clone(), config(Some("out.yaml")));

        let manifest = pipeline.extract().await.unwrap();
        let result = pipeline.transform(manifest).await.unwrap();
        assert_eq!(result.removed_count(), 1);

        let location = pipeline.load(&result).await.unwrap();
        assert_eq!(location.as_deref(), Some("out.yaml"));

        let written = String::from_utf8(storage.get_file("out.yaml").await.unwrap()).unwrap();
        assert_eq!(written, result.manifest);
        let documents = remover::parse_documents(&written).unwrap();
        let annotations = remover::get_items(&documents[0], &["metadata", "annotations"]).unwrap();
        assert!(annotations.get("a").is_none());
        assert_eq!(annotations.get("b").and_then(|v| v.as_str()), Some("2"));
    }

    #[tokio::test]
    async fn test_load_without_output_path_writes_nothing() {
        let storage = MockStorage::with_file("in.yaml", MANIFEST.as_bytes());
        let pipeline = ManifestPipeline::new(storage.clone(), config(None));

        let manifest = pipeline.extract().await.unwrap();
        let result = pipeline.transform(manifest).await.unwrap();
        assert_eq!(pipeline.load(&result).await.unwrap(), None);
        assert_eq!(storage.files.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_extract_rejects_non_utf8() {
        let storage = MockStorage::with_file("in.yaml", &[0xff, 0xfe, 0x00]);
        let pipeline = ManifestPipeline::new(storage, config(None));

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, PruneError::ProcessingError { .. }));
    }

    #[tokio::test]
    async fn test_missing_manifest_is_io_error() {
        let storage = MockStorage::with_file("other.yaml", MANIFEST.as_bytes());
        let pipeline = ManifestPipeline::new(storage, config(None));

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, PruneError::IoError(_)));
    }
}
