//! FNV-1a 32-bit string hashing.
//!
//! Cached hash literals embedded in source are fingerprints of identifier
//! names computed with this function. The hash is a pure function of the
//! input bytes and is not suitable for anything security related.

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 16_777_619;

/// Compute the FNV-1a 32-bit hash of `input`.
#[must_use]
pub fn fnv1a_32(input: &str) -> u32 {
    input.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Format a hash the way directives spell it: lowercase hex, `0x` prefix,
/// no zero padding.
#[must_use]
pub fn format_hash(hash: u32) -> String {
    format!("{hash:#x}")
}

/// Render the canonical `CHECK_HASH("name", 0x...)` directive for `name`.
#[must_use]
pub fn directive_for(name: &str) -> String {
    format!("CHECK_HASH(\"{name}\", {})", format_hash(fnv1a_32(name)))
}

#[cfg(test)]
#[path = "hash_tests.rs"]
mod tests;
