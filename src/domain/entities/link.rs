//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// Owner assigned to every link until authenticated callers exist.
pub const DEFAULT_OWNER_ID: i64 = 0;

/// A persisted link record.
///
/// `short_code` is `None` between the insert and the update of the two-phase
/// write. A record stuck in that state is an orphan: it is reachable by id
/// only, never by code.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub owner_id: i64,
    pub short_code: Option<String>,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        owner_id: i64,
        short_code: Option<String>,
        original_url: String,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            owner_id,
            short_code,
            original_url,
            created_at,
            updated_at,
        }
    }

    /// Returns true once the short code has been attached.
    pub fn is_coded(&self) -> bool {
        self.short_code.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Short code, or an empty string for a record that has none yet.
    pub fn code(&self) -> &str {
        self.short_code.as_deref().unwrap_or_default()
    }
}

/// Input data for the insert step. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub owner_id: i64,
    pub original_url: String,
}

impl NewLink {
    pub fn new(original_url: String) -> Self {
        Self {
            owner_id: DEFAULT_OWNER_ID,
            original_url,
        }
    }
}

/// Input data for the update step, addressed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkUpdate {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
}

/// Lookup filter. Present fields are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkFilter {
    pub id: Option<i64>,
    pub short_code: Option<String>,
}

impl LinkFilter {
    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            short_code: None,
        }
    }

    pub fn by_code(code: impl Into<String>) -> Self {
        Self {
            id: None,
            short_code: Some(code.into()),
        }
    }

    /// Returns true if `link` satisfies every present field.
    pub fn matches(&self, link: &Link) -> bool {
        self.id.is_none_or(|id| link.id == id)
            && self
                .short_code
                .as_deref()
                .is_none_or(|code| link.short_code.as_deref() == Some(code))
    }
}
