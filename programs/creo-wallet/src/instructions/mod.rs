pub mod create_wallet;
pub mod execute;
pub mod initialize;
pub mod manage_authorizations;

pub use create_wallet::*;
pub use execute::*;
pub use initialize::*;
pub use manage_authorizations::*;
