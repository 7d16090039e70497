pub mod add_milestone;
pub mod apply_metric_update;
pub mod burn_tokens;
pub mod configure_factory;
pub mod configure_ledger;
pub mod create_ledger;
pub mod initialize_factory;

pub use add_milestone::*;
pub use apply_metric_update::*;
pub use burn_tokens::*;
pub use configure_factory::*;
pub use configure_ledger::*;
pub use create_ledger::*;
pub use initialize_factory::*;
