pub mod convert;

pub use convert::{handle_index, handle_upload};
