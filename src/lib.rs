// Shopsort - Shopping List Categorization Engine - Core Library
// Groups a freeform item list by merchant according to a user-supplied
// rule configuration. The CLI binary is just one caller; any host that
// can hand the engine config text and input text can embed it.

pub mod amount;
pub mod config;
pub mod engine;
pub mod render;
pub mod resolver;
pub mod tokenizer;

// Re-export commonly used types
pub use amount::Amount;
pub use config::{ConfigError, MatchMode, Merchant, MerchantConfig, MerchantRule};
pub use engine::{GroupedResult, ListEngine, ListItem, MerchantGroup, UNASSIGNED_GROUP};
pub use render::ListGroup;
pub use resolver::{resolve, Assignment, ResolvedItem};
pub use tokenizer::{tokenize, ItemRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
