pub mod directory;
pub mod etl;
pub mod extract;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod table;

pub use crate::domain::model::{
    Directory, DirectoryEntry, DirectoryOutcome, Extraction, RawEmployee, RunOutcome,
    TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
