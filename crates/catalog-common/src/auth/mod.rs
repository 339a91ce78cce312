//! Session token issuing and verification

mod session;

pub use session::{SessionClaims, SessionTokenService};
