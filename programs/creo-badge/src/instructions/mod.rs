pub mod initialize_registry;
pub mod manage_minters;
pub mod mint_badge;
pub mod revoke_badge;
pub mod set_badge_status;
pub mod update_profile;

pub use initialize_registry::*;
pub use manage_minters::*;
pub use mint_badge::*;
pub use revoke_badge::*;
pub use set_badge_status::*;
pub use update_profile::*;
