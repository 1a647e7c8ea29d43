pub mod image_codec;
pub mod image_store;

pub use image_codec::{CodecError, ImageCodec};
pub use image_store::{ImageStore, StoreError};

#[cfg(test)]
pub use image_codec::MockImageCodec;
#[cfg(test)]
pub use image_store::MockImageStore;
