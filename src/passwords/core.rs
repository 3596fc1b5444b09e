use tracing::debug;

use super::blob::{HASH_LEN, KEY_LEN, PasswordHash, SALT_LEN};
use super::policy::PasswordPolicy;
use crate::ct::ConstantTimeEq;
use crate::derivation::{Kdf, Scrypt, ScryptParams};
use crate::error::{Error, Result};
use crate::rng;

/// Characters used by generated passwords.
const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Password generation, hashing and verification under a fixed policy.
///
/// # Example
///
/// ```rust
/// use keyderive::passwords::Passwords;
///
/// let passwords = Passwords::default();
/// let stored = passwords.hash("correct horse").unwrap();
///
/// assert!(passwords.verify("correct horse", &stored));
/// assert!(!passwords.verify("correct house", &stored));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passwords {
    policy: PasswordPolicy,
    /// Parameters for new hashes, and the fallback for out-of-policy ones
    defaults: ScryptParams,
}

impl Passwords {
    /// Applies `policy`.
    ///
    /// # Errors
    /// Fails if the policy's `log_n`, `r` and `p` are not valid SCrypt
    /// parameters, or fall outside the policy's own bounds.
    pub fn new(policy: PasswordPolicy) -> Result<Self> {
        if !policy.accepts(policy.log_n, policy.r, policy.p) {
            debug!(
                log_n = policy.log_n,
                r = policy.r,
                p = policy.p,
                "password policy parameters outside its bounds"
            );
            return Err(Error::PolicyOutOfBounds);
        }

        let defaults = ScryptParams::new(policy.log_n, policy.r.into(), policy.p.into(), KEY_LEN)
            .inspect_err(|e| debug!(%e, "rejected password policy"))?;

        Ok(Self { policy, defaults })
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Generates a random alphanumeric password of the policy's length.
    ///
    /// # Errors
    /// Fails only if the OS entropy source cannot seed the generator.
    pub fn generate(&self) -> Result<String> {
        self.generate_with_len(self.policy.generated_len)
    }

    /// Generates a random alphanumeric password of `len` characters.
    ///
    /// Each character is an independent uniform draw from `[A-Za-z0-9]`.
    ///
    /// # Errors
    /// Fails only if the OS entropy source cannot seed the generator.
    pub fn generate_with_len(&self, len: usize) -> Result<String> {
        rng::with_thread_rng(|rng| {
            (0..len)
                .map(|_| ALPHABET[rng.below(ALPHABET.len() as u32) as usize] as char)
                .collect()
        })
    }

    /// Hashes `password` under a fresh random salt.
    ///
    /// # Errors
    /// Fails only if the OS entropy source cannot seed the generator.
    pub fn hash(&self, password: &str) -> Result<Vec<u8>> {
        let mut salt = [0u8; SALT_LEN];
        rng::fill(&mut salt)?;

        Ok(self.hash_with_salt(password, &salt))
    }

    /// Hashes `password` under a caller-chosen salt.
    pub fn hash_with_salt(&self, password: &str, salt: &[u8; SALT_LEN]) -> Vec<u8> {
        seal(password, salt, &self.defaults).to_vec()
    }

    /// Checks `password` against a stored blob.
    ///
    /// The blob is zero-extended or truncated to [`HASH_LEN`] (51) bytes
    /// first, and embedded parameters outside the policy are replaced by the
    /// policy defaults, so malformed input never fails loudly: it only
    /// compares unequal. The final comparison covers all 51 bytes in constant time.
    pub fn verify(&self, password: &str, hash: &[u8]) -> bool {
        if hash.len() != HASH_LEN {
            debug!(len = hash.len(), "password hash has unexpected length");
        }

        let mut candidate = [0u8; HASH_LEN];
        let take = hash.len().min(HASH_LEN);
        candidate[..take].copy_from_slice(&hash[..take]);

        let stored = PasswordHash::from_bytes(&candidate);
        let params = self.params_for(&stored);
        let expected = seal(password, stored.salt(), &params);

        expected.ct_eq(&candidate)
    }

    fn params_for(&self, stored: &PasswordHash) -> ScryptParams {
        let (log_n, r, p) = (stored.log_n(), stored.r(), stored.p());

        self.policy
            .accepts(log_n, r, p)
            .then(|| stored.params().ok())
            .flatten()
            .unwrap_or_else(|| {
                debug!(log_n, r, p, "embedded scrypt parameters rejected, using defaults");
                self.defaults
            })
    }
}

impl Default for Passwords {
    fn default() -> Self {
        Self {
            policy: PasswordPolicy::default(),
            defaults: ScryptParams::default(),
        }
    }
}

/// Derives the key and frames it with the salt and parameters.
fn seal(password: &str, salt: &[u8; SALT_LEN], params: &ScryptParams) -> [u8; HASH_LEN] {
    let derived = Scrypt::new(*params).derive_key(password.as_bytes(), salt);

    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(&derived);

    PasswordHash::new(key, *salt, params).to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> Passwords {
        Passwords::new(PasswordPolicy {
            log_n: 10,
            r: 1,
            p: 1,
            ..PasswordPolicy::default()
        })
        .unwrap()
    }

    #[test]
    fn default_policy_matches_default_params() {
        let passwords = Passwords::default();
        assert_eq!(Passwords::new(PasswordPolicy::default()), Ok(passwords));
    }

    #[test]
    fn invalid_policy_is_rejected() {
        // Inside the default bounds, but n = 2^16 needs r >= 2
        let policy = PasswordPolicy {
            log_n: 16,
            r: 1,
            ..PasswordPolicy::default()
        };
        assert_eq!(Passwords::new(policy), Err(Error::ScryptNTooLarge));
    }

    #[test]
    fn policy_must_accept_its_own_parameters() {
        let policy = PasswordPolicy {
            log_n: 18,
            ..PasswordPolicy::default()
        };
        assert_eq!(Passwords::new(policy), Err(Error::PolicyOutOfBounds));

        let policy = PasswordPolicy {
            p: 2,
            p_bounds: 1..=1,
            ..PasswordPolicy::default()
        };
        assert_eq!(Passwords::new(policy), Err(Error::PolicyOutOfBounds));
    }

    #[test]
    fn generated_passwords_are_alphanumeric() {
        let passwords = Passwords::default();
        let generated = passwords.generate().unwrap();

        assert_eq!(generated.len(), 10);
        assert!(generated.bytes().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(passwords.generate_with_len(0).unwrap(), "");
    }

    #[test]
    fn blob_embeds_policy_parameters() {
        let blob = cheap().hash_with_salt("pw", &[3u8; SALT_LEN]);

        assert_eq!(blob.len(), HASH_LEN);
        assert_eq!(&blob[KEY_LEN..KEY_LEN + SALT_LEN], &[3u8; SALT_LEN]);
        assert_eq!(&blob[48..], &[10, 1, 1]);
    }

    #[test]
    fn out_of_policy_parameters_fall_back_to_defaults() {
        let passwords = cheap();
        let salt = [5u8; SALT_LEN];

        // A blob claiming log_n = 30 is checked against the defaults
        let mut blob = passwords.hash_with_salt("pw", &salt);
        blob[48] = 30;
        assert!(!passwords.verify("pw", &blob));

        let stored = PasswordHash::parse(&blob).unwrap();
        assert_eq!(passwords.params_for(&stored).log_n(), 10);
    }

    #[test]
    fn in_policy_parameters_are_honoured() {
        // Hashed with (11, 2, 1) while the policy hashes with (10, 1, 1)
        let params = ScryptParams::new(11, 2, 1, KEY_LEN).unwrap();
        let blob = seal("pw", &[1u8; SALT_LEN], &params);

        assert!(cheap().verify("pw", &blob));
    }
}
