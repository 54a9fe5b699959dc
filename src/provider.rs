//! Provider-facing hooks (behavior) and the Mollie adapter implementing them.
//!
//! `hooks` defines [`PlatformHooks`], the capability a generic OAuth 2.0 client core consumes.
//! `mollie` provides [`MollieProvider`], its validated builder, and the fixed endpoint set.
//! `payload` decodes the platform's error bodies into [`ErrorPayload`].

pub mod hooks;
pub mod mollie;
pub mod payload;

pub use hooks::*;
pub use mollie::*;
pub use payload::*;
