use chrono::{DateTime, Utc};

/// Timestamp in UTC
///
/// Every clock in the workspace reports this type, both live and scripted.
/// Future: could become a newtype if consumers ever need a non-UTC view
pub type Timestamp = DateTime<Utc>;
