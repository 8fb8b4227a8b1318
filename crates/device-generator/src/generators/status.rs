//! Device status generator.

use rand::Rng;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_ACCEPTED: &str = "accepted";

/// Draw a device status: `pending` when a uniform draw from `0..=10`
/// exceeds 5 (5 out of 11 outcomes), `accepted` otherwise.
pub fn generate_status<R: Rng>(rng: &mut R) -> &'static str {
    if rng.gen_range(0..=10) > 5 {
        STATUS_PENDING
    } else {
        STATUS_ACCEPTED
    }
}
