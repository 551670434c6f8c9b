use std::path::PathBuf;
use std::time::Duration;

use roadmap_bedrock::generate::{BedrockGenerator, RoadmapGenerator};
use roadmap_export::styles::DocumentStyles;
use tokio::sync::Mutex;

use crate::aws::build_aws_config;
use crate::config::{RoadmapConfig, export_path};
use crate::coordinator::RoadmapCoordinator;

/// Everything a generation session shares.
pub struct AppState<G> {
    pub coordinator: RoadmapCoordinator<G>,
    pub exporter: PdfExporter,
}

/// Where and how roadmaps are exported. Needs no AWS access.
pub struct PdfExporter {
    pub path: PathBuf,
    pub styles: DocumentStyles,
    /// Serialises writes to the fixed export path.
    pub(crate) lock: Mutex<()>,
}

impl PdfExporter {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            styles: DocumentStyles::default(),
            lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &RoadmapConfig) -> Self {
        Self::new(export_path(config))
    }
}

impl<G: RoadmapGenerator + 'static> AppState<G> {
    pub fn new(generator: G, timeout: Duration, exporter: PdfExporter) -> Self {
        Self {
            coordinator: RoadmapCoordinator::with_timeout(generator, timeout),
            exporter,
        }
    }
}

impl AppState<BedrockGenerator> {
    /// Build the state for a loaded config, talking to Bedrock.
    pub async fn from_config(config: &RoadmapConfig) -> Self {
        let aws_config = build_aws_config(&config.region, &config.credentials).await;
        let generator = BedrockGenerator::new(&aws_config, config.model_id.clone());
        Self::new(
            generator,
            Duration::from_secs(config.request_timeout_secs),
            PdfExporter::from_config(config),
        )
    }
}
