pub mod image;
mod types;

use std::path::Path;

pub use types::*;

/// Writing a pixel buffer out to a file on disk.
pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}
