use serde::{Deserialize, Serialize};

use crate::{QualifiedPath, QuotingPolicy, RelationType};

/// One relation entry of a build manifest.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelationConfig {
    pub path: QualifiedPath,
    pub quoting: QuotingPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation_type: Option<RelationType>,
}

impl RelationConfig {
    #[must_use]
    pub const fn new(path: QualifiedPath, quoting: QuotingPolicy) -> Self {
        Self {
            path,
            quoting,
            relation_type: None,
        }
    }

    #[must_use]
    pub fn with_relation_type(mut self, relation_type: RelationType) -> Self {
        self.relation_type = Some(relation_type);
        self
    }
}
