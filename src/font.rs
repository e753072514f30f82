//! Immutable font data and text resolution.

use core::marker::PhantomData;

use crate::lookup::{self, Key};
use crate::record::GlyphRecord;
use crate::store::{AtlasStore, BitmapStore, LinearStore};

/// An immutable bitmap font: glyph records sorted ascending by code, plus
/// the bitmap data they point into.
///
/// Table invariants are the asset builder's responsibility (see
/// [`crate::asset`]): codes strictly ascending and unique, index 0 the
/// placeholder record that stands in for unsupported input and is never
/// exact-matched. Fonts are plain read-only data; resolving text holds no
/// state beyond its own cursor, so any number of runs may share one font,
/// also across threads.
#[derive(Clone, Copy, Debug)]
pub struct Font<'a, S: BitmapStore = LinearStore> {
    gap_width: u8,
    glyph_height: u8,
    data: &'a [u8],
    records: &'a [GlyphRecord],
    _store: PhantomData<S>,
}

/// Font over a flat bitmap buffer.
pub type LinearFont<'a> = Font<'a, LinearStore>;
/// Font over a 2D texture atlas.
pub type AtlasFont<'a> = Font<'a, AtlasStore>;

impl<'a, S: BitmapStore> Font<'a, S> {
    /// Creates a font over `records` and its bitmap `data`.
    pub const fn new(
        gap_width: u8,
        glyph_height: u8,
        data: &'a [u8],
        records: &'a [GlyphRecord],
    ) -> Self {
        Self {
            gap_width,
            glyph_height,
            data,
            records,
            _store: PhantomData,
        }
    }

    /// Pixel gap inserted after every resolved glyph.
    pub const fn gap_width(&self) -> u8 {
        self.gap_width
    }

    /// Overall character height in pixels.
    pub const fn glyph_height(&self) -> u8 {
        self.glyph_height
    }

    /// Raw bitmap data the records point into.
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// All glyph records, placeholder first.
    pub const fn records(&self) -> &'a [GlyphRecord] {
        self.records
    }

    /// The record resolved for unsupported input, if the table is non-empty.
    pub fn placeholder(&self) -> Option<GlyphRecord> {
        self.records.first().copied()
    }

    /// Decoded bitmap location of `record` under this font's storage layout,
    /// `None` for width-only records.
    pub fn location(&self, record: GlyphRecord) -> Option<S::Location> {
        record.is_printable().then(|| S::location(record))
    }

    /// Resolves `text` into a lazy sequence of glyph records, one per
    /// matched code or sequence, longest match first.
    pub fn glyph_run<'t>(&self, text: &'t str) -> GlyphRun<'a, 't> {
        GlyphRun {
            records: self.records,
            rest: text.as_bytes(),
        }
    }

    /// Rendered pixel width of `text`: glyph widths plus one gap per
    /// resolved glyph, including width-only glyphs.
    pub fn measure(&self, text: &str) -> u32 {
        let gap = self.gap_width as u32;

        self.glyph_run(text)
            .fold(0u32, |width, record| {
                width.saturating_add(record.width()).saturating_add(gap)
            })
    }

    /// Smallest table code strictly greater than `code`, wrapping to the
    /// first eligible code when none is greater.
    ///
    /// A table holding only the placeholder yields the placeholder code
    /// regardless of `include_placeholder`.
    pub fn next_code(&self, code: u32, include_placeholder: bool) -> u32 {
        let eligible = self.eligible(include_placeholder);
        let above = eligible.partition_point(|record| record.code() <= code);

        match eligible.get(above).or_else(|| eligible.first()) {
            Some(record) => record.code(),
            None => self.degraded_code(code),
        }
    }

    /// Greatest table code strictly less than `code`, wrapping to the last
    /// eligible code when none is smaller.
    pub fn prev_code(&self, code: u32, include_placeholder: bool) -> u32 {
        let eligible = self.eligible(include_placeholder);
        let below = eligible.partition_point(|record| record.code() < code);

        match below.checked_sub(1).map(|index| &eligible[index]).or_else(|| eligible.last()) {
            Some(record) => record.code(),
            None => self.degraded_code(code),
        }
    }

    fn eligible(&self, include_placeholder: bool) -> &'a [GlyphRecord] {
        if include_placeholder {
            self.records
        } else {
            self.records.get(1..).unwrap_or(&[])
        }
    }

    fn degraded_code(&self, code: u32) -> u32 {
        self.records.first().map_or(code, |record| record.code())
    }
}

/// Lazy resolution of one text into glyph records.
///
/// The walk is storage-agnostic; each step consumes at least one byte of
/// the remaining input, so a run over `N` bytes yields at most `N` records
/// and always terminates.
#[derive(Clone, Copy, Debug)]
pub struct GlyphRun<'a, 't> {
    records: &'a [GlyphRecord],
    rest: &'t [u8],
}

impl<'t> GlyphRun<'_, 't> {
    /// Unresolved tail of the input, in bytes.
    pub fn remaining(&self) -> &'t [u8] {
        self.rest
    }
}

impl Iterator for GlyphRun<'_, '_> {
    type Item = GlyphRecord;

    fn next(&mut self) -> Option<GlyphRecord> {
        if self.rest.is_empty() {
            return None;
        }

        let searchable = self.records.get(1..).unwrap_or(&[]);

        if let Some(record) = lookup::floor_record(searchable, self.rest) {
            let matched = lookup::match_len(self.rest, Key::encode(record.code()).as_bytes());
            if matched > 0 {
                self.rest = &self.rest[matched..];
                return Some(*record);
            }
        }

        // No match: emit the placeholder and skip one code point.
        self.rest = &self.rest[lookup::skip_one_code(self.rest)..];
        self.records.first().copied()
    }
}
