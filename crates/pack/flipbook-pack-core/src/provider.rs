//! Provider traits for the external collaborators: the virtual filesystem
//! that hands out manifest bytes and listings, and the texture host that
//! turns page paths into displayable handles.
//!
//! Presentation adapters implement these and pass them into the loader and
//! catalog as `&mut dyn` objects; the core never touches the real
//! filesystem or the GPU.

use serde::{Deserialize, Serialize};

/// Opaque page-texture id issued by the host renderer. Id 0 is reserved
/// as the null handle for slots whose texture failed to resolve.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PageHandle(pub u32);

impl PageHandle {
    pub const NULL: PageHandle = PageHandle(0);

    #[inline]
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// Read-only file access, typically backed by mounted archives.
pub trait FileProvider {
    /// Whole-file read; None when the path does not exist.
    fn read_all(&mut self, path: &str) -> Option<Vec<u8>>;

    fn exists(&mut self, path: &str) -> bool;

    /// Names (not full paths) of the entries directly under `path`.
    /// Missing directories list as empty.
    fn list_dir(&mut self, path: &str) -> Vec<String>;
}

/// Texture host: resolves page paths into handles and takes them back
/// when a pack is released.
pub trait PageResolver {
    /// None when the texture cannot be decoded or uploaded; the loader
    /// degrades that slot to [`PageHandle::NULL`].
    fn resolve(&mut self, path: &str) -> Option<PageHandle>;

    fn release(&mut self, handle: PageHandle);
}
