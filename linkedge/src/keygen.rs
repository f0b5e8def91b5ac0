//! Collision-checked random key generation.
//!
//! Candidates are drawn from an alphanumeric alphabet and checked against the
//! store before being handed out. Regeneration is explicitly bounded: after
//! [`WIDEN_AFTER`] colliding short candidates the generator switches to the
//! long identifier space, and after [`MAX_ATTEMPTS`] total attempts it fails
//! with [`Error::KeySpaceSaturated`] rather than looping forever. With 62^7
//! short keys per domain the widening and the cap are unreachable outside
//! pathological key exhaustion.

use rand::Rng;
use tracing::warn;

use crate::{db::handlers::store::LinkStore, errors::Error};

/// Alphabet for generated keys. URL-safe without escaping.
const KEY_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a normal generated key.
pub const SHORT_KEY_LENGTH: usize = 7;

/// Length of a key generated in `long` mode.
pub const LONG_KEY_LENGTH: usize = 69;

/// Colliding short candidates tolerated before widening to the long space.
const WIDEN_AFTER: u32 = 3;

/// Total attempt budget before giving up with a saturation error.
pub const MAX_ATTEMPTS: u32 = 10;

/// Options for [`generate_random_key`].
#[derive(Debug, Clone, Default)]
pub struct RandomKeyOptions {
    /// Path prefix prepended to the generated identifier. Leading and
    /// trailing slashes are stripped; the prefix and identifier are joined
    /// by a single slash.
    pub prefix: Option<String>,
    /// Generate in the long identifier space from the first attempt.
    pub long: bool,
}

/// Generate a random key that is unique within `domain`.
///
/// Each candidate is checked with [`LinkStore::key_exists`]; colliding
/// candidates are regenerated up to [`MAX_ATTEMPTS`] times, widening to
/// [`LONG_KEY_LENGTH`] after [`WIDEN_AFTER`] collisions.
pub async fn generate_random_key<S: LinkStore + ?Sized>(
    store: &S,
    domain: &str,
    options: &RandomKeyOptions,
) -> Result<String, Error> {
    let prefix = options
        .prefix
        .as_deref()
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty());

    for attempt in 1..=MAX_ATTEMPTS {
        let length = if options.long || attempt > WIDEN_AFTER {
            LONG_KEY_LENGTH
        } else {
            SHORT_KEY_LENGTH
        };

        let candidate = match prefix {
            Some(prefix) => format!("{prefix}/{}", random_candidate(length)),
            None => random_candidate(length),
        };

        if !store.key_exists(domain, &candidate).await? {
            return Ok(candidate);
        }
        warn!(domain, attempt, "generated key already exists, regenerating");
    }

    Err(Error::KeySpaceSaturated {
        domain: domain.to_string(),
        attempts: MAX_ATTEMPTS,
    })
}

fn random_candidate(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| KEY_ALPHABET[rng.random_range(0..KEY_ALPHABET.len())] as char)
        .collect()
}
