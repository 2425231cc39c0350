//! Session verification utilities

mod session;

pub use session::{SessionClaims, SessionService};
