pub mod body;
pub mod station;
pub mod store;

pub use body::{BodyParams, ReferenceBody};
pub use station::StationPoint;
pub use store::BodyStore;
