//! Pack data model: the immutable tree a manifest loads into.
//!
//! A [`Pack`] exclusively owns its symbols, frames and polygons. Page
//! textures are host resources the pack holds handles to; frames refer to
//! pages by index and every dereference is bounds-checked.

use serde::{Deserialize, Serialize};

use crate::error::PackError;
use crate::geom::{Point, Polygon, Rect};
use crate::provider::{PageHandle, PageResolver};

/// One animation cel: where it sits on its page, how it is offset from
/// the symbol origin, how many ticks it holds, and its collision rings.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Frame {
    /// Declared frame id from the manifest. Informational only; playback
    /// order is array order.
    pub index: i32,
    /// Index into [`Pack::pages`]; dereference through [`Pack::page`].
    pub page: i32,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub ox: i32,
    pub oy: i32,
    /// Ticks this frame holds before playback advances.
    pub duration: i32,
    /// Collision rings in frame-local, unscaled units, relative to the
    /// origin offset.
    pub polys: Vec<Polygon>,
}

impl Frame {
    /// Rectangle of this frame's pixels inside its page texture.
    pub fn source_rect(&self) -> Rect {
        Rect {
            x: self.x as f32,
            y: self.y as f32,
            w: self.w as f32,
            h: self.h as f32,
        }
    }

    /// Screen-space offset of the frame for a symbol placed at `origin`:
    /// the term shared by frame placement and hit-testing.
    pub fn offset(&self, origin: Point, scale: f32) -> Point {
        Point::new(
            origin.x + self.ox as f32 * scale,
            origin.y + self.oy as f32 * scale,
        )
    }

    /// Where the frame lands on screen for a symbol placed at `origin`,
    /// uniformly scaled.
    pub fn dest_rect(&self, origin: Point, scale: f32) -> Rect {
        let at = self.offset(origin, scale);
        Rect {
            x: at.x,
            y: at.y,
            w: self.w as f32 * scale,
            h: self.h as f32 * scale,
        }
    }
}

/// Named, ordered frame sequence. Order is manifest order, which is also
/// playback order; declared frame ids are not consulted.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub frames: Vec<Frame>,
}

impl Symbol {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }
}

/// A loaded animation pack. Built atomically by the loader, immutable
/// afterwards, replaced wholesale through [`PackSlot`].
///
/// Not `Clone`: page handles are exclusively owned host resources,
/// released exactly once through [`Pack::release_pages`].
#[derive(Debug, Default)]
pub struct Pack {
    /// Declared playback rate, stored as the manifest gave it (24.0 when
    /// absent). The player clamps non-positive rates at use time.
    pub fps: f32,
    /// Page-texture handles in manifest order. Null handles mark pages
    /// that failed to resolve; frames on those pages render nothing.
    pub pages: Vec<PageHandle>,
    pub symbols: Vec<Symbol>,
}

impl Pack {
    /// Checked page lookup: out-of-range indices and null slots are None.
    pub fn page(&self, index: i32) -> Option<PageHandle> {
        let idx = usize::try_from(index).ok()?;
        self.pages.get(idx).copied().filter(|h| !h.is_null())
    }

    /// Like [`Pack::page`] but loud: an out-of-range index is reported
    /// instead of silently skipped.
    pub fn try_page(&self, index: i32) -> Result<PageHandle, PackError> {
        usize::try_from(index)
            .ok()
            .and_then(|idx| self.pages.get(idx).copied())
            .ok_or(PackError::PageOutOfRange {
                page: index,
                pages: self.pages.len(),
            })
    }

    pub fn symbol(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    /// Display names in picker order.
    pub fn symbol_names(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(|s| s.name.as_str())
    }

    /// True when there is nothing to show; the presentation layer renders
    /// an explicit no-content state for these packs.
    pub fn is_empty(&self) -> bool {
        self.symbols.iter().all(|s| s.frames.is_empty())
    }

    /// Hand every live page handle back to the resolver. The page table
    /// is drained, so a second call has nothing left to release.
    pub fn release_pages(&mut self, resolver: &mut dyn PageResolver) {
        for handle in self.pages.drain(..) {
            if !handle.is_null() {
                resolver.release(handle);
            }
        }
    }
}

/// Holder for "the active pack". Swapping packs through the slot keeps
/// the release discipline in one place: the outgoing pack's textures go
/// back to the resolver before the new pack takes its place.
#[derive(Debug, Default)]
pub struct PackSlot {
    pack: Option<Pack>,
}

impl PackSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&Pack> {
        self.pack.as_ref()
    }

    /// Install `next` as the active pack, releasing the previous one.
    pub fn replace(&mut self, next: Pack, resolver: &mut dyn PageResolver) {
        self.clear(resolver);
        self.pack = Some(next);
    }

    /// Release the active pack, leaving the slot empty.
    pub fn clear(&mut self, resolver: &mut dyn PageResolver) {
        if let Some(mut old) = self.pack.take() {
            old.release_pages(resolver);
        }
    }
}
