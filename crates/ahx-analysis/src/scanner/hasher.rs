//! Content hashing for external memoization of analysis results.

use xxhash_rust::xxh3::xxh3_64;

/// xxh3 of `content` as 16 lowercase hex digits.
pub fn hash_content(content: &[u8]) -> String {
    format!("{:016x}", xxh3_64(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_and_distinct() {
        let a = hash_content(b"export const A = 1;");
        assert_eq!(a.len(), 16);
        assert_eq!(a, hash_content(b"export const A = 1;"));
        assert_ne!(a, hash_content(b"export const A = 2;"));
    }
}
