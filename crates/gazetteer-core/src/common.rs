// crates/gazetteer-core/src/common.rs

use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the knowledge base.
///
/// Returned by [`KnowledgeBase::stats`](crate::KnowledgeBase::stats), these
/// counts reflect what survived the admission filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KbStats {
    pub countries: usize,
    /// Admitted cities, including ones shadowed by a later namesake.
    pub cities: usize,
    /// Distinct terms in the name index.
    pub terms: usize,
}
