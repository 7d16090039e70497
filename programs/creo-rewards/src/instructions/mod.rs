pub mod batch_distribute;
pub mod claim_reward;
pub mod create_campaign;
pub mod emergency_distribute;
pub mod set_campaign_active;
pub mod withdraw_remaining;

pub use batch_distribute::*;
pub use claim_reward::*;
pub use create_campaign::*;
pub use emergency_distribute::*;
pub use set_campaign_active::*;
pub use withdraw_remaining::*;
