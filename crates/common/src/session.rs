use std::time::{SystemTime, UNIX_EPOCH};

use rand::{distributions::Alphanumeric, Rng};

/// Length of the random component of a session token.
const NONCE_LEN: usize = 24;

/// Generate an opaque session token.
///
/// Combines a random alphanumeric nonce with the current unix-epoch
/// millisecond count so that two tokens minted in the same instant still
/// differ. The token is a correlation key, not a credential.
pub fn generate_session_token() -> String {
    let nonce: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect();
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("sess_{}_{:x}", nonce, millis)
}
