//! Random key material.
//!
//! Callers pass the random source explicitly so that tests can supply a
//! seeded generator. Production callers use `rand::rngs::OsRng`.

use rand::{CryptoRng, RngCore};

/// Fill a 128-bit value from `rng`.
pub fn generate_random_number<R: RngCore + CryptoRng>(rng: &mut R) -> [u8; 16] {
    let mut out = [0u8; 16];
    rng.fill_bytes(&mut out);
    out
}

/// Generate a new NetKey.
pub fn generate_random_network_key<R: RngCore + CryptoRng>(rng: &mut R) -> [u8; 16] {
    generate_random_number(rng)
}

/// Generate a new AppKey.
pub fn generate_random_application_key<R: RngCore + CryptoRng>(rng: &mut R) -> [u8; 16] {
    generate_random_number(rng)
}
