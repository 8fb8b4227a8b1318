//! MAC address generator.

use rand::Rng;

/// Generate a random MAC address rendered as lowercase colon-separated hex.
pub fn generate_mac<R: Rng>(rng: &mut R) -> String {
    let octets: [u8; 6] = rng.gen();
    octets
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(":")
}
