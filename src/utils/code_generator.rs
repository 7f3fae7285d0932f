//! Short code generation.
//!
//! Codes are drawn uniformly from the base-36 alphabet (`0-9a-z`). With the
//! default length of 6 that gives 36^6 (about 2^31) possible codes. Codes are
//! not meant to be unguessable; uniqueness is enforced by the link store.

use rand::Rng;

/// Characters a generated code may contain.
pub const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Default length of generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Smallest length that still yields at least 2^30 distinct codes.
pub const MIN_CODE_LENGTH: usize = 6;

/// Source of candidate short codes.
///
/// Generation is infallible and need not be deterministic. Two calls may
/// return the same value; callers resolve collisions against the store.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces one candidate code.
    fn generate(&self) -> String;
}

/// Generates fixed-length base-36 codes from the thread-local RNG.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    /// Creates a generator producing codes of `length` characters.
    ///
    /// Lengths below [`MIN_CODE_LENGTH`] are raised to it.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.max(MIN_CODE_LENGTH),
        }
    }

    /// Length of every generated code.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
