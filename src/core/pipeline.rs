pub use crate::app::pipelines::directory_pipeline::{DirectoryPipeline, PRETTY_JSON_FILE_NAME};
