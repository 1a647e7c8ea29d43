//! # pixelbin - Content-Addressed Image Annotation Service
//!
//! An HTTP service that ingests uploaded images, normalizes their size
//! through an adaptive resize plan, embeds a caller-supplied annotation
//! into the re-encoded output, and stores the result under a key
//! derived from its own bytes.
//!
//! ## Architecture Layers
//!
//! - **Domain**: pure value objects (content keys, resize plans) and
//!   domain errors
//! - **Application**: use cases and ports (codec and store interfaces)
//! - **Infrastructure**: `image`-crate codec with annotation embedding,
//!   content-addressed filesystem store
//! - **API**: axum handlers, HTML pages and the uniform error boundary
//!
//! ## Key Features
//!
//! - Content-addressed storage with automatic deduplication
//! - Adaptive two-phase resize: a cheap downsample pre-pass for huge
//!   images, then a smoothing resize
//! - Annotation text carried inside the encoded image itself
//! - Every handler wrapped by a single error-to-response boundary

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use api::{create_router, AppState};
pub use application::{ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::value_objects;
