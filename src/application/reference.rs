//! Booking reference generation
//!
//! References are the only key end users hold for retrieving a booking,
//! so candidates are drawn from a cryptographically strong source and
//! encoded with sqids into a short alphanumeric code. Collisions against
//! stored references are retried; the retry loop is bounded so a
//! misconfigured alphabet fails loudly instead of spinning forever.

use rand::rngs::OsRng;
use rand::Rng;
use sqids::Sqids;
use tracing::warn;

use crate::domain::booking::ReferenceStore;
use crate::domain::{DomainError, DomainResult};

/// Default alphabet, shuffled so references are not trivially sequential
pub const DEFAULT_ALPHABET: &str =
    "2pKB0eLxIhfd5GMH3qQREN9XaVPl7bUDtzZFoAjiwv6WgYumrcJ14yCnskT8SO";
pub const DEFAULT_MIN_LENGTH: u8 = 8;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

pub struct ReferenceGenerator {
    sqids: Sqids,
    max_attempts: u32,
}

impl ReferenceGenerator {
    pub fn new(alphabet: &str, min_length: u8, max_attempts: u32) -> DomainResult<Self> {
        let sqids = Sqids::builder()
            .alphabet(alphabet.chars().collect())
            .min_length(min_length)
            .build()
            .map_err(|e| DomainError::Validation(format!("Invalid reference alphabet: {}", e)))?;
        Ok(Self {
            sqids,
            max_attempts: max_attempts.max(1),
        })
    }

    /// Draw one reference candidate from three random integers
    fn candidate(&self) -> DomainResult<String> {
        let numbers = [
            OsRng.gen::<u32>() as u64,
            OsRng.gen::<u32>() as u64,
            OsRng.gen::<u32>() as u64,
        ];
        self.sqids
            .encode(&numbers)
            .map_err(|e| DomainError::Storage(format!("Reference encoding failed: {}", e)))
    }

    /// A reference not currently present in the store at time of return
    pub async fn unique_reference<S>(&self, store: &S) -> DomainResult<String>
    where
        S: ReferenceStore + ?Sized,
    {
        for attempt in 0..self.max_attempts {
            let reference = self.candidate()?;
            if !store.reference_exists(&reference).await? {
                return Ok(reference);
            }
            warn!(attempt, reference = %reference, "Booking reference collision, redrawing");
        }
        Err(DomainError::Storage(format!(
            "Booking reference space exhausted after {} attempts",
            self.max_attempts
        )))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    use super::*;

    /// Reports the first `collisions` candidates as taken
    struct CollidingStore {
        collisions: u32,
        calls: AtomicU32,
    }

    impl CollidingStore {
        fn new(collisions: u32) -> Self {
            Self {
                collisions,
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl ReferenceStore for CollidingStore {
        async fn reference_exists(&self, _reference: &str) -> DomainResult<bool> {
            let seen = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(seen < self.collisions)
        }
    }

    fn generator() -> ReferenceGenerator {
        ReferenceGenerator::new(DEFAULT_ALPHABET, DEFAULT_MIN_LENGTH, DEFAULT_MAX_ATTEMPTS)
            .unwrap()
    }

    #[tokio::test]
    async fn references_respect_length_and_alphabet() {
        let generator = generator();
        let store = CollidingStore::new(0);
        for _ in 0..20 {
            let reference = generator.unique_reference(&store).await.unwrap();
            assert!(reference.len() >= DEFAULT_MIN_LENGTH as usize);
            assert!(reference.chars().all(|c| DEFAULT_ALPHABET.contains(c)));
        }
    }

    #[tokio::test]
    async fn consecutive_references_differ() {
        let generator = generator();
        let store = CollidingStore::new(0);
        let first = generator.unique_reference(&store).await.unwrap();
        let second = generator.unique_reference(&store).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn collisions_are_redrawn() {
        let generator = generator();
        let store = CollidingStore::new(3);
        let reference = generator.unique_reference(&store).await.unwrap();
        assert!(!reference.is_empty());
        assert_eq!(store.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn exhaustion_fails_loudly() {
        let generator = ReferenceGenerator::new(DEFAULT_ALPHABET, DEFAULT_MIN_LENGTH, 5).unwrap();
        let store = CollidingStore::new(u32::MAX);
        let err = generator.unique_reference(&store).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
        assert_eq!(store.calls.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn too_small_alphabet_is_rejected() {
        assert!(ReferenceGenerator::new("ab", 8, 10).is_err());
    }
}
