#![cfg_attr(not(test), no_std)]

//! Glyph-metrics lookup for sparse, variable-width bitmap fonts.
//!
//! Resolves UTF-8 text against a sorted table of packed glyph records:
//! longest match first, placeholder fallback for anything the font does not
//! cover, and pixel-width measurement on top of the same resolution walk.
//! The tables themselves are immutable assets, typically embedded as
//! `static` data produced by an offline font build.

pub mod asset;
mod font;
pub mod lookup;
mod record;
mod store;

pub use font::{AtlasFont, Font, GlyphRun, LinearFont};
pub use record::GlyphRecord;
pub use store::{AtlasPos, AtlasStore, BitmapStore, LinearStore};
