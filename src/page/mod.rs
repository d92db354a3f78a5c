//! Page resources
//!
//! A [`Resource`] wraps one source URL and memoizes the single fetch attempt made for
//! it. The outcome is held in an explicit [`FetchState`]:
//!
//! ```text
//! Unfetched ──fetch──▶ FetchedOk(content)
//!           └────────▶ FetchedFail(error)
//! ```
//!
//! Both fetched states are terminal for the lifetime of the resource.

mod resource;
mod state;

pub use resource::Resource;
pub use state::FetchState;
