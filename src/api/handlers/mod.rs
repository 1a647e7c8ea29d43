pub mod health;
pub mod image;
pub mod upload;
pub mod view;

pub use health::health_handler;
pub use image::image_handler;
pub use upload::{upload_form_handler, upload_handler};
pub use view::view_handler;
