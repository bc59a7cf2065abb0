use crate::domain::model::{DocumentReport, PruneResult, RemovalDirective};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn manifest_path(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn directives(&self) -> &[RemovalDirective];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    async fn transform(&self, manifest: String) -> Result<PruneResult>;
    async fn load(&self, result: &PruneResult) -> Result<Option<String>>;
    async fn plan(&self, manifest: &str) -> Result<Vec<DocumentReport>>;
}
