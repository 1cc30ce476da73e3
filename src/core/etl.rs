use crate::core::{Pipeline, RunOutcome};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Starting directory build...");

        // Extract
        let extraction = self.pipeline.extract().await?;
        tracing::debug!("Extracted {} records", extraction.employees.len());

        // Transform
        let result = self.pipeline.transform(extraction).await?;
        let markdown = result
            .directory
            .as_ref()
            .map(|directory| directory.markdown.clone());

        // Load
        let paths = self.pipeline.load(result).await?;
        for path in &paths {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(match markdown {
            Some(markdown) => RunOutcome::Written { paths, markdown },
            None => RunOutcome::NoEntries { paths },
        })
    }
}
