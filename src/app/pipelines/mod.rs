pub mod directory_pipeline;
