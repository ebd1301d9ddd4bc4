pub mod auth;
#[cfg(feature = "ssr")]
pub mod lookup;
pub mod notify;

pub use auth::*;
pub use notify::*;
