//! Per-thread handle accounting.
//!
//! Every successful `*_create` bumps the `created` counter of its kind and
//! every destroy of a live handle bumps `destroyed`. Counters are
//! thread-local: a handle is expected to live and die on the thread that
//! created it, and tests running in parallel see only their own activity.

use std::cell::Cell;

/// The resource kinds the boundary hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    Locale,
    DataProvider,
    FixedDecimal,
    FixedDecimalFormat,
}

impl HandleKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Locale => "locale",
            Self::DataProvider => "data provider",
            Self::FixedDecimal => "fixed decimal",
            Self::FixedDecimalFormat => "fixed decimal format",
        }
    }
}

/// Create/destroy totals for one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandleCounts {
    pub created: u64,
    pub destroyed: u64,
}

impl HandleCounts {
    const ZERO: Self = Self {
        created: 0,
        destroyed: 0,
    };

    /// Handles created but not yet destroyed.
    #[must_use]
    pub const fn live(&self) -> u64 {
        self.created.saturating_sub(self.destroyed)
    }
}

/// Snapshot of every kind's counters on the current thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandleStats {
    pub locale: HandleCounts,
    pub data_provider: HandleCounts,
    pub fixed_decimal: HandleCounts,
    pub fixed_decimal_format: HandleCounts,
}

impl HandleStats {
    const ZERO: Self = Self {
        locale: HandleCounts::ZERO,
        data_provider: HandleCounts::ZERO,
        fixed_decimal: HandleCounts::ZERO,
        fixed_decimal_format: HandleCounts::ZERO,
    };

    #[must_use]
    pub fn get(&self, kind: HandleKind) -> HandleCounts {
        match kind {
            HandleKind::Locale => self.locale,
            HandleKind::DataProvider => self.data_provider,
            HandleKind::FixedDecimal => self.fixed_decimal,
            HandleKind::FixedDecimalFormat => self.fixed_decimal_format,
        }
    }

    fn get_mut(&mut self, kind: HandleKind) -> &mut HandleCounts {
        match kind {
            HandleKind::Locale => &mut self.locale,
            HandleKind::DataProvider => &mut self.data_provider,
            HandleKind::FixedDecimal => &mut self.fixed_decimal,
            HandleKind::FixedDecimalFormat => &mut self.fixed_decimal_format,
        }
    }

    /// Live handles across all kinds.
    #[must_use]
    pub fn total_live(&self) -> u64 {
        [
            self.locale,
            self.data_provider,
            self.fixed_decimal,
            self.fixed_decimal_format,
        ]
        .iter()
        .map(HandleCounts::live)
        .sum()
    }
}

thread_local! {
    static STATS: Cell<HandleStats> = const { Cell::new(HandleStats::ZERO) };
}

/// Current counters for this thread.
#[must_use]
pub fn snapshot() -> HandleStats {
    STATS.with(Cell::get)
}

pub(crate) fn record_create(kind: HandleKind) {
    STATS.with(|stats| {
        let mut next = stats.get();
        next.get_mut(kind).created += 1;
        stats.set(next);
    });
    tracing::trace!(kind = kind.as_str(), "handle created");
}

pub(crate) fn record_destroy(kind: HandleKind) {
    STATS.with(|stats| {
        let mut next = stats.get();
        next.get_mut(kind).destroyed += 1;
        stats.set(next);
    });
    tracing::trace!(kind = kind.as_str(), "handle destroyed");
}
