/// Upper bound on the number of plates a query looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxResults {
    /// Every plate in the product
    #[default]
    All,
    /// At most this many plates
    Limit(u64),
}

impl MaxResults {
    /// Raw integer meaning "all plates"
    pub const ALL_SENTINEL: i64 = -1;

    /// Clamp to the number of plates available.
    pub fn resolve(self, total: u64) -> u64 {
        match self {
            MaxResults::All => total,
            MaxResults::Limit(limit) => limit.min(total),
        }
    }
}

impl From<i64> for MaxResults {
    /// `-1` means all plates; any other non-positive value means none.
    fn from(raw: i64) -> Self {
        if raw == Self::ALL_SENTINEL {
            MaxResults::All
        } else {
            MaxResults::Limit(u64::try_from(raw).unwrap_or(0))
        }
    }
}

impl From<Option<u64>> for MaxResults {
    fn from(limit: Option<u64>) -> Self {
        limit.map_or(MaxResults::All, MaxResults::Limit)
    }
}
