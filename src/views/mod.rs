//! Routed view components. Each page loads its own data on first render,
//! so navigating to a route is what triggers the fetch for that branch.

mod home;
mod memo;
mod not_found;
mod rasq;

pub use home::HomePage;
pub use memo::MemoPage;
pub use not_found::NotFoundPage;
pub use rasq::RandomSequencePage;
