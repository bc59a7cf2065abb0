use crate::core::{DocumentReport, Pipeline, PruneResult};
use crate::utils::error::Result;

pub struct PruneEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PruneEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load. Returns the result together with
    /// the location it was written to, if any.
    pub async fn run(&self) -> Result<(PruneResult, Option<String>)> {
        tracing::info!("Starting manifest pruning...");

        // Extract
        let manifest = self.pipeline.extract().await?;
        tracing::info!("Read manifest ({} bytes)", manifest.len());

        // Transform
        let result = self.pipeline.transform(manifest).await?;
        tracing::info!(
            "Removed {} keys across {} documents",
            result.removed_count(),
            result.documents.len()
        );

        // Load
        let location = self.pipeline.load(&result).await?;
        if let Some(path) = &location {
            tracing::info!("Output saved to: {}", path);
        }

        Ok((result, location))
    }

    pub async fn plan(&self) -> Result<Vec<DocumentReport>> {
        let manifest = self.pipeline.extract().await?;
        let reports = self.pipeline.plan(&manifest).await?;
        tracing::info!(
            "Planned removal of {} keys across {} documents",
            reports.iter().map(|doc| doc.removed.len()).sum::<usize>(),
            reports.len()
        );
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PruneError;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct StaticPipeline {
        manifest: &'static str,
        loaded: AtomicBool,
    }

    #[async_trait::async_trait]
    impl Pipeline for StaticPipeline {
        async fn extract(&self) -> Result<String> {
            Ok(self.manifest.to_string())
        }

        async fn transform(&self, manifest: String) -> Result<PruneResult> {
            crate::core::remover::prune_manifest(&manifest, &[])
        }

        async fn load(&self, _result: &PruneResult) -> Result<Option<String>> {
            self.loaded.store(true, Ordering::SeqCst);
            Ok(Some("memory".to_string()))
        }

        async fn plan(&self, manifest: &str) -> Result<Vec<DocumentReport>> {
            crate::core::remover::plan_removal(manifest, &[])
        }
    }

    #[test]
    fn test_run_loads_result() {
        let engine = PruneEngine::new(StaticPipeline {
            manifest: "kind: Pod\n---\nkind: Service\n",
            loaded: AtomicBool::new(false),
        });

        let (result, location) = tokio_test::block_on(engine.run()).unwrap();
        assert_eq!(result.documents.len(), 2);
        assert_eq!(location.as_deref(), Some("memory"));
        assert!(engine.pipeline.loaded.load(Ordering::SeqCst));
    }

    #[test]
    fn test_plan_does_not_load() {
        let engine = PruneEngine::new(StaticPipeline {
            manifest: "kind: Pod\n",
            loaded: AtomicBool::new(false),
        });

        let reports = tokio_test::block_on(engine.plan()).unwrap();
        assert_eq!(reports[0].kind.as_deref(), Some("Pod"));
        assert!(!engine.pipeline.loaded.load(Ordering::SeqCst));
    }

    #[test]
    fn test_parse_failure_stops_before_load() {
        let engine = PruneEngine::new(StaticPipeline {
            manifest: "kind: [Pod\n",
            loaded: AtomicBool::new(false),
        });

        let err = tokio_test::block_on(engine.run()).unwrap_err();
        assert!(matches!(err, PruneError::ParseError { document: 0, .. }));
        assert!(!engine.pipeline.loaded.load(Ordering::SeqCst));
    }
}
