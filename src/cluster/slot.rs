//! Redis Cluster slot calculation.
//!
//! Redis Cluster uses CRC16 to map keys to slots (0-16383).
//! This module provides utilities for calculating slot numbers from keys.

use crc::{Crc, CRC_16_XMODEM};
use rand::Rng;

/// Number of hash slots in Redis Cluster.
pub const SLOT_COUNT: u16 = 16384;

/// CRC-16/XMODEM: polynomial 0x1021, initial value 0, no reflection, no final xor.
///
/// This is the CCITT table Redis itself uses; `crc` builds the 256-entry
/// lookup table at compile time.
const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// Calculates the Redis Cluster slot for a given key.
///
/// Redis uses CRC16 modulo 16384 for slot calculation.
/// If the key contains `{...}`, only the content inside the braces
/// is used for hashing (hash tags).
///
/// An empty key has no home slot: a random slot is returned on every call,
/// drawn from the calling thread's generator.
///
/// # Examples
///
/// ```
/// use muxis_topology::key_slot;
///
/// assert_eq!(key_slot("foo"), 12182);
/// assert_eq!(key_slot("{user1000}.following"), key_slot("{user1000}.followers"));
/// assert_ne!(key_slot("user1000"), key_slot("user2000"));
/// ```
pub fn key_slot(key: &str) -> u16 {
    key_slot_with(key, &mut rand::thread_rng())
}

/// Like [`key_slot`], drawing the empty-key slot from `rng`.
///
/// # Examples
///
/// ```
/// use muxis_topology::{key_slot_with, SLOT_COUNT};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert!(key_slot_with("", &mut rng) < SLOT_COUNT);
/// assert_eq!(key_slot_with("foo", &mut rng), 12182);
/// ```
pub fn key_slot_with<R: Rng>(key: &str, rng: &mut R) -> u16 {
    let hash_key = extract_hash_tag(key);
    if hash_key.is_empty() {
        return rng.gen_range(0..SLOT_COUNT);
    }
    crc16(hash_key.as_bytes()) % SLOT_COUNT
}

/// CRC16 checksum of `data`.
pub(crate) fn crc16(data: &[u8]) -> u16 {
    CRC16.checksum(data)
}

/// Extracts the hash tag from a key.
///
/// Redis hash tags are defined by `{...}`:
/// - `{user1000}.following` → hash tag is `user1000`
/// - `foo{bar}baz` → hash tag is `bar`
/// - `foo{}{bar}` → first `{` is followed by `}` directly, so no tag; use whole key
/// - `foo` → no hash tag, use whole key
///
/// Only the first `{` and the first `}` after it count.
fn extract_hash_tag(key: &str) -> &str {
    if let Some(start) = key.find('{') {
        if let Some(end) = key[start + 1..].find('}') {
            let tag_start = start + 1;
            let tag_end = tag_start + end;

            if tag_end > tag_start {
                return &key[tag_start..tag_end];
            }
        }
    }

    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_slot_count() {
        assert_eq!(SLOT_COUNT, 16384);
    }

    #[test]
    fn test_crc16_check_value() {
        // CRC-16/XMODEM catalogue check value.
        assert_eq!(crc16(b"123456789"), 0x31C3);
        assert_eq!(crc16(b""), 0);
    }

    #[test]
    fn test_key_slot_reference_vectors() {
        // Values reported by CLUSTER KEYSLOT on a real server.
        assert_eq!(key_slot("foo"), 12182);
        assert_eq!(key_slot("bar"), 5061);
        assert_eq!(key_slot("hello"), 866);
        assert_eq!(key_slot("123456789"), 12739);
        assert_eq!(key_slot("user1000"), 3443);
        assert_eq!(key_slot("{user1000}.following"), 3443);
    }

    #[test]
    fn test_key_slot_simple() {
        let slot1 = key_slot("mykey");
        let slot2 = key_slot("mykey");
        assert_eq!(slot1, slot2);
        assert!(slot1 < SLOT_COUNT);
    }

    #[test]
    fn test_key_slot_different_keys() {
        assert_ne!(key_slot("key1"), key_slot("key2"));
    }

    #[test]
    fn test_key_slot_with_hash_tag() {
        let slot1 = key_slot("user:{42}:profile");
        let slot2 = key_slot("user:{42}:orders");
        let slot3 = key_slot("{42}");

        assert_eq!(slot1, slot2);
        assert_eq!(slot2, slot3);
        assert_eq!(slot1, key_slot("42"));
        assert_eq!(slot1, 8000);
    }

    #[test]
    fn test_key_slot_hash_tag_vs_no_tag() {
        let with_tag = key_slot("{user}1000");
        let without_tag = key_slot("user1000");
        assert_ne!(with_tag, without_tag);

        assert_eq!(with_tag, key_slot("{user}2000"));
    }

    #[test]
    fn test_key_slot_empty_tag_hashes_whole_key() {
        assert_eq!(key_slot("a{}b"), 13694);
        assert_eq!(key_slot("{}"), 15257);
        assert_ne!(key_slot("a{}b"), key_slot("c{}d"));
    }

    #[test]
    fn test_extract_hash_tag_simple() {
        assert_eq!(extract_hash_tag("foo{bar}"), "bar");
        assert_eq!(extract_hash_tag("{user1000}.following"), "user1000");
        assert_eq!(extract_hash_tag("prefix{tag}suffix"), "tag");
    }

    #[test]
    fn test_extract_hash_tag_no_tag() {
        assert_eq!(extract_hash_tag("simple_key"), "simple_key");
        assert_eq!(extract_hash_tag(""), "");
    }

    #[test]
    fn test_extract_hash_tag_empty() {
        assert_eq!(extract_hash_tag("foo{}bar"), "foo{}bar");
        assert_eq!(extract_hash_tag("{}"), "{}");
        assert_eq!(extract_hash_tag("foo{}{bar}"), "foo{}{bar}");
    }

    #[test]
    fn test_extract_hash_tag_multiple_braces() {
        assert_eq!(extract_hash_tag("foo{bar}{baz}"), "bar");
        assert_eq!(extract_hash_tag("{a}{b}{c}"), "a");
        // The first `}` after the first `{` closes the tag.
        assert_eq!(extract_hash_tag("{a{b}c}"), "a{b");
        assert_eq!(extract_hash_tag("}x{y}"), "y");
    }

    #[test]
    fn test_extract_hash_tag_unmatched() {
        assert_eq!(extract_hash_tag("foo{bar"), "foo{bar");
        assert_eq!(extract_hash_tag("foo}bar"), "foo}bar");
        assert_eq!(extract_hash_tag("{"), "{");
        assert_eq!(extract_hash_tag("}"), "}");
    }

    #[test]
    fn test_key_slot_empty_key_in_range() {
        for _ in 0..1000 {
            assert!(key_slot("") < SLOT_COUNT);
        }
    }

    #[test]
    fn test_key_slot_empty_key_is_random() {
        let slots: HashSet<u16> = (0..64).map(|_| key_slot("")).collect();
        // 64 draws from 16384 slots landing on a single value is effectively impossible.
        assert!(slots.len() > 1);
    }

    #[test]
    fn test_key_slot_with_seeded_rng_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let from_a: Vec<u16> = (0..16).map(|_| key_slot_with("", &mut a)).collect();
        let from_b: Vec<u16> = (0..16).map(|_| key_slot_with("", &mut b)).collect();
        assert_eq!(from_a, from_b);
    }

    #[test]
    fn test_key_slot_with_ignores_rng_for_real_keys() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(key_slot_with("foo", &mut rng), key_slot("foo"));
        assert_eq!(key_slot_with("x{foo}y", &mut rng), 12182);
    }

    #[test]
    fn test_key_slot_unicode() {
        let slot1 = key_slot("用户1000");
        let slot2 = key_slot("пользователь1000");
        assert!(slot1 < SLOT_COUNT);
        assert!(slot2 < SLOT_COUNT);
        assert_eq!(slot1, crc16("用户1000".as_bytes()) % SLOT_COUNT);
    }

    #[test]
    fn test_key_slot_long_key() {
        let long_key = "a".repeat(10000);
        assert!(key_slot(&long_key) < SLOT_COUNT);
    }

    #[test]
    fn test_key_slot_distribution() {
        let slots: HashSet<u16> = (0..100).map(|i| key_slot(&format!("key{}", i))).collect();
        assert!(slots.len() >= 50, "Keys should distribute across slots");
    }

    #[test]
    fn test_key_slot_concurrent_empty_keys() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| (0..256).map(|_| key_slot("")).max()))
            .collect();

        for handle in handles {
            let max = handle.join().unwrap().unwrap();
            assert!(max < SLOT_COUNT);
        }
    }
}
