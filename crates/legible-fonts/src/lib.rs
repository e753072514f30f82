#![cfg_attr(not(test), no_std)]

//! Generated bitmap font assets in packed glyph-record form.

mod data;

use legible::LinearFont;

/// Variable-width 5x7 pixel font covering ASCII letters, digits and common
/// punctuation.
///
/// Bitmap data is column-major: one byte per pixel column, bit 0 the top
/// row, and a record's location is the byte offset of its first column.
/// The comma and semicolon tails dip one row below the 7-pixel glyph body,
/// so the font reserves 8 rows overall.
pub const MONO_5X7: LinearFont<'static> = LinearFont::new(1, 8, &data::BITMAP, &data::RECORDS);
