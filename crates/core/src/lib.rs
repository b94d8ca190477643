mod capability;
mod component;
mod config;
mod error;
mod merge;
mod path;
mod policy;
mod record;
mod value;

pub use capability::QuotingCapability;
pub use component::{ComponentName, RelationType};
pub use config::RelationConfig;
pub use error::{Error, Result};
pub use merge::deep_merge;
pub use path::QualifiedPath;
pub use policy::{QUOTE_ALL, QUOTE_NONE, QuotingPolicy};
pub use record::Record;
pub use value::{Mapping, Truthiness, Value};
