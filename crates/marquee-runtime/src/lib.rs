//! Async composition over the catalog client and the preference store:
//! the store actor that serializes all local mutations, and the home
//! feed that aggregates concurrent category fetches.

pub mod home;
mod store;

pub use home::HomeFeed;
pub use store::StoreHandle;
