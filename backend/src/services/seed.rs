//! Seed derivation for the mock KPI generator.

use sha2::{Digest, Sha256};

/// Separator placed between the site identifier and the period label.
pub const SEED_DELIMITER: char = ':';

/// Number of leading hex digits of the digest decoded into the seed.
const SEED_HEX_DIGITS: usize = 8;

/// Calculate the SHA-256 digest of `"{site_id}:{period}"` as lowercase hex.
pub fn seed_digest(site_id: &str, period: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(site_id.as_bytes());
    hasher.update([SEED_DELIMITER as u8]);
    hasher.update(period.as_bytes());
    hex::encode(hasher.finalize())
}

/// Derive the 32-bit generator seed for a (site, period) pair.
///
/// The seed is the first 8 hex digits of the SHA-256 digest read as a
/// base-16 integer, so it is stable across processes and platforms.
pub fn derive_seed(site_id: &str, period: &str) -> u32 {
    let digest = seed_digest(site_id, period);
    // Eight hex digits always fit in a u32
    u32::from_str_radix(&digest[..SEED_HEX_DIGITS], 16).unwrap_or_default()
}
