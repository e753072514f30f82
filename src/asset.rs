//! Serialization boundary for packed glyph tables.
//!
//! A font asset stores its table as consecutive little-endian word pairs in
//! the layout documented in [`crate::record`]; there is no surrounding file
//! format here. Nothing in this module runs on the lookup path: asset
//! pipelines decode once at load time, and invariant checking is an opt-in
//! step for builders that cannot trust their input.

use log::debug;

use crate::record::GlyphRecord;

/// Size of one packed record in bytes.
pub const RECORD_BYTES: usize = 8;

/// Asset decoding and validation errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AssetError {
    /// Raw data length is not a whole number of records.
    Truncated,
    /// Caller-supplied record storage is too small.
    StorageTooSmall,
    /// Table holds no records at all.
    Empty,
    /// Code at this record index is not strictly greater than its
    /// predecessor's.
    Unsorted { index: usize },
    /// Record at this index uses the reserved extended indirection.
    Extended { index: usize },
}

/// Decodes packed records from `raw` into `out`, returning the record count.
///
/// `raw` is read as little-endian `(word0, word1)` pairs. No invariants are
/// checked here; run [`validate`] on the result when the source is not
/// trusted.
pub fn decode_records(raw: &[u8], out: &mut [GlyphRecord]) -> Result<usize, AssetError> {
    if raw.len() % RECORD_BYTES != 0 {
        return Err(AssetError::Truncated);
    }

    let count = raw.len() / RECORD_BYTES;
    if count > out.len() {
        return Err(AssetError::StorageTooSmall);
    }

    for (slot, chunk) in out.iter_mut().zip(raw.chunks_exact(RECORD_BYTES)) {
        let word0 = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let word1 = u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);
        *slot = GlyphRecord::from_words(word0, word1);
    }

    Ok(count)
}

/// Checks the table invariants the lookup algorithm relies on: a non-empty
/// table with strictly ascending (hence unique) codes, and no records using
/// the reserved extended indirection.
pub fn validate(records: &[GlyphRecord]) -> Result<(), AssetError> {
    if records.is_empty() {
        return Err(AssetError::Empty);
    }

    for (index, record) in records.iter().enumerate() {
        if record.is_extended() {
            return Err(AssetError::Extended { index });
        }
        if index > 0 && record.code() <= records[index - 1].code() {
            return Err(AssetError::Unsorted { index });
        }
    }

    debug!("glyph table ok: {} records", records.len());
    Ok(())
}
