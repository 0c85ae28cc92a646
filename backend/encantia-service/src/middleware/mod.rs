pub mod identity;
pub mod maintenance;

pub use identity::{CurrentUser, MaybeUser};
pub use maintenance::MaintenanceGate;
