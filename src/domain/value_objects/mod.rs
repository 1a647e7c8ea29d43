pub mod content_key;
pub mod resize_plan;

pub use content_key::{ContentKey, KEY_HEX_LEN};
pub use resize_plan::{ResizeKind, ResizePlan, ResizeStep};
