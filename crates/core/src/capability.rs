use indexmap::IndexMap;

use crate::ComponentName;

/// Quoting decisions a SQL renderer consumes when it turns a relation path
/// into text.
pub trait QuotingCapability: Send + Sync {
    fn should_quote(&self, component: ComponentName) -> bool;

    /// Decision for every component, in declaration order.
    fn quoting(&self) -> IndexMap<ComponentName, bool> {
        ComponentName::ALL
            .into_iter()
            .map(|component| (component, self.should_quote(component)))
            .collect()
    }
}
