pub mod atmospheric;
pub mod bouguer;
pub mod free_air;
pub mod normal_gravity;

pub use atmospheric::AtmosphericModel;
pub use bouguer::BouguerModel;
pub use free_air::FreeAirModel;
pub use normal_gravity::NormalGravityModel;
