pub mod initialize;
pub mod revoke_creator;
pub mod rotate_authorities;
pub mod verify_creator;

pub use initialize::*;
pub use revoke_creator::*;
pub use rotate_authorities::*;
pub use verify_creator::*;
