//! Application layer: the session use case and paced reply delivery.

pub mod pacer;
pub mod script;
pub mod session;

pub use pacer::ReplyPacer;
pub use script::{ReplyScript, ScriptStep};
pub use session::{
    AdvisorSession, CatalogEntry, GenerateOutcome, PanelItem, Persisted, SelectionPanel,
};
