//! Tolerant manifest loader: JSON bytes -> [`Pack`].
//!
//! The manifest schema is forgiving: a structurally valid document always
//! loads, and every missing or mistyped field degrades to a documented
//! default instead of failing. Only an unparseable document aborts the
//! load.
//!
//! Defaults:
//! - `fps` -> 24.0 when absent or non-numeric.
//! - page entries that are not strings, or whose texture fails to
//!   resolve, occupy their slot as a null handle.
//! - symbol `name` -> `"symbol"`, `frames` -> empty.
//! - frame integers (`idx`, `page`, `x`, `y`, `w`, `h`, `ox`, `oy`) -> 0.
//! - `duration` -> 1: an undeclared duration holds for exactly one tick.

use log::warn;
use serde_json::Value;

use crate::config::DEFAULT_FPS;
use crate::data::{Frame, Pack, Symbol};
use crate::error::PackError;
use crate::geom::{Point, Polygon};
use crate::provider::{FileProvider, PageHandle, PageResolver};

/// Placeholder for symbols the manifest left unnamed.
pub const DEFAULT_SYMBOL_NAME: &str = "symbol";

/// Parse a manifest document into a pack, resolving page textures through
/// `resolver` as they are encountered: in array order, synchronously, one
/// call per string entry.
///
/// Fails only when the bytes are not valid JSON. A valid document whose
/// top level is not an object yields an empty default pack.
pub fn parse_pack(bytes: &[u8], resolver: &mut dyn PageResolver) -> Result<Pack, PackError> {
    let doc: Value = serde_json::from_slice(bytes)?;

    let fps = doc
        .get("fps")
        .and_then(Value::as_f64)
        .map(|f| f as f32)
        .unwrap_or(DEFAULT_FPS);

    let mut pages = Vec::new();
    if let Some(entries) = doc.get("pages").and_then(Value::as_array) {
        pages.reserve_exact(entries.len());
        for entry in entries {
            pages.push(resolve_page(entry, resolver));
        }
    }

    let mut symbols = Vec::new();
    if let Some(entries) = doc.get("symbols").and_then(Value::as_array) {
        symbols.reserve_exact(entries.len());
        for entry in entries {
            symbols.push(parse_symbol(entry));
        }
    }

    Ok(Pack {
        fps,
        pages,
        symbols,
    })
}

/// Read a manifest through the file provider and parse it.
pub fn load_pack(
    files: &mut dyn FileProvider,
    resolver: &mut dyn PageResolver,
    path: &str,
) -> Result<Pack, PackError> {
    let bytes = files.read_all(path).ok_or_else(|| PackError::Resource {
        path: path.to_string(),
    })?;
    parse_pack(&bytes, resolver)
}

fn resolve_page(entry: &Value, resolver: &mut dyn PageResolver) -> PageHandle {
    let Some(path) = entry.as_str() else {
        return PageHandle::NULL;
    };
    match resolver.resolve(path) {
        Some(handle) => handle,
        None => {
            warn!("page texture failed to resolve: {path}");
            PageHandle::NULL
        }
    }
}

fn parse_symbol(entry: &Value) -> Symbol {
    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_SYMBOL_NAME)
        .to_string();

    let mut frames = Vec::new();
    if let Some(list) = entry.get("frames").and_then(Value::as_array) {
        frames.reserve_exact(list.len());
        for frame in list {
            frames.push(parse_frame(frame));
        }
    }

    Symbol { name, frames }
}

fn parse_frame(entry: &Value) -> Frame {
    Frame {
        index: int_field(entry, "idx"),
        page: int_field(entry, "page"),
        x: int_field(entry, "x"),
        y: int_field(entry, "y"),
        w: int_field(entry, "w"),
        h: int_field(entry, "h"),
        ox: int_field(entry, "ox"),
        oy: int_field(entry, "oy"),
        // Distinct default: an undeclared duration holds for one tick.
        duration: entry
            .get("duration")
            .and_then(Value::as_f64)
            .map(|v| v as i32)
            .unwrap_or(1),
        polys: parse_polys(entry.get("poly")),
    }
}

/// Integer field with a 0 default for anything missing or non-numeric.
fn int_field(entry: &Value, key: &str) -> i32 {
    entry
        .get(key)
        .and_then(Value::as_f64)
        .map(|v| v as i32)
        .unwrap_or(0)
}

/// The `poly` field ships in two shapes and both must keep working: a
/// flat array of `{x,y}` objects is ONE polygon, while an array of arrays
/// is one polygon per inner array. A non-array inner element yields an
/// empty polygon, not an error.
fn parse_polys(value: Option<&Value>) -> Vec<Polygon> {
    let Some(outer) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    match outer.first() {
        Some(first) if first.is_object() => vec![parse_ring(outer)],
        _ => outer
            .iter()
            .map(|inner| {
                inner
                    .as_array()
                    .map(|points| parse_ring(points))
                    .unwrap_or_default()
            })
            .collect(),
    }
}

fn parse_ring(points: &[Value]) -> Polygon {
    Polygon::new(points.iter().map(parse_point).collect())
}

fn parse_point(value: &Value) -> Point {
    let coord = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_f64)
            .map(|v| v as f32)
            .unwrap_or(0.0)
    };
    Point::new(coord("x"), coord("y"))
}
