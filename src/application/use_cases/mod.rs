pub mod ingest_image;
pub mod serve_image;

pub use ingest_image::{IngestError, IngestImageUseCase, MAX_DIMENSION};
pub use serve_image::{ServeError, ServeImageUseCase};
