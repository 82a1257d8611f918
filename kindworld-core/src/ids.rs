use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Issues certificate identifiers that stay unique within a session.
///
/// Each id combines the caller's clock reading, a monotonically increasing
/// sequence number, and a random suffix, so two calls in the same
/// millisecond still differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateIdGenerator {
    rng: ChaCha8Rng,
    sequence: u32,
}

impl CertificateIdGenerator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            sequence: 0,
        }
    }

    pub fn next_id(&mut self, now_ms: u64) -> String {
        self.sequence = self.sequence.wrapping_add(1);
        let suffix: u32 = self.rng.r#gen();
        format!(
            "KW-{now_ms:X}-{seq:04}-{suffix:08X}",
            seq = self.sequence
        )
    }

    #[must_use]
    pub const fn issued(&self) -> u32 {
        self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_millisecond_ids_are_distinct() {
        let mut ids = CertificateIdGenerator::new(7);
        let seen: HashSet<String> = (0..500).map(|_| ids.next_id(1_720_000_000_000)).collect();
        assert_eq!(seen.len(), 500);
        assert_eq!(ids.issued(), 500);
    }

    #[test]
    fn ids_are_deterministic_per_seed() {
        let mut a = CertificateIdGenerator::new(42);
        let mut b = CertificateIdGenerator::new(42);
        assert_eq!(a.next_id(1), b.next_id(1));
        let mut c = CertificateIdGenerator::new(43);
        assert_ne!(a.next_id(2), c.next_id(2));
    }

    #[test]
    fn id_shape_is_stable() {
        let mut ids = CertificateIdGenerator::new(1);
        let id = ids.next_id(255);
        assert!(id.starts_with("KW-FF-0001-"));
        assert_eq!(id.len(), "KW-FF-0001-".len() + 8);
    }
}
