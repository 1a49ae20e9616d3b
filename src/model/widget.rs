//! Dashboard widget catalogue.
//!
//! Widgets are static cards; the grid only cares about their ids. The
//! catalogue maps each id to a title and a few lines of sample content.

use super::identifiers::WidgetId;
use std::fmt;

/// Kinds of widget the dashboard knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Account balance summary.
    Balance,
    /// Monthly spending breakdown.
    Spending,
    /// Linked payment cards.
    Cards,
    /// Most recent transactions.
    Transactions,
    /// Savings goal progress.
    Savings,
    /// Currency exchange rates.
    Exchange,
}

impl WidgetKind {
    /// Every widget kind, in default dashboard order.
    pub const ALL: [WidgetKind; 6] = [
        WidgetKind::Balance,
        WidgetKind::Spending,
        WidgetKind::Cards,
        WidgetKind::Transactions,
        WidgetKind::Savings,
        WidgetKind::Exchange,
    ];

    /// Stable id string used in config files and the position map.
    pub fn id_str(self) -> &'static str {
        match self {
            WidgetKind::Balance => "balance",
            WidgetKind::Spending => "spending",
            WidgetKind::Cards => "cards",
            WidgetKind::Transactions => "transactions",
            WidgetKind::Savings => "savings",
            WidgetKind::Exchange => "exchange",
        }
    }

    /// Look up a kind by its id string.
    pub fn from_id_str(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id_str() == raw)
    }

    /// Widget id for this kind.
    pub fn widget_id(self) -> WidgetId {
        // Catalogue ids are non-empty literals without whitespace.
        match WidgetId::new(self.id_str()) {
            Ok(id) => id,
            Err(err) => unreachable!("catalogue id rejected: {err}"),
        }
    }

    /// Title shown in the widget's border.
    pub fn title(self) -> &'static str {
        match self {
            WidgetKind::Balance => "Balance",
            WidgetKind::Spending => "Spending",
            WidgetKind::Cards => "Cards",
            WidgetKind::Transactions => "Transactions",
            WidgetKind::Savings => "Savings",
            WidgetKind::Exchange => "Exchange",
        }
    }

    /// Sample body lines.
    pub fn body(self) -> &'static [&'static str] {
        match self {
            WidgetKind::Balance => &["₩ 3,482,190", "+2.4% this month"],
            WidgetKind::Spending => &["Food      ₩ 412,000", "Transport ₩ 98,500"],
            WidgetKind::Cards => &["Debit  •••• 4021", "Credit •••• 7788"],
            WidgetKind::Transactions => &["Coffee   -₩ 5,200", "Salary +₩ 3,100,000"],
            WidgetKind::Savings => &["Trip fund 62%", "₩ 1,240,000 / 2,000,000"],
            WidgetKind::Exchange => &["USD 1,382.50", "JPY   921.14"],
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Default dashboard order as widget ids.
pub fn default_widget_ids() -> Vec<WidgetId> {
    WidgetKind::ALL.into_iter().map(WidgetKind::widget_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_str_round_trips_for_every_kind() {
        for kind in WidgetKind::ALL {
            assert_eq!(WidgetKind::from_id_str(kind.id_str()), Some(kind));
        }
    }

    #[test]
    fn unknown_id_str_is_none() {
        assert_eq!(WidgetKind::from_id_str("crypto"), None);
    }

    #[test]
    fn default_widget_ids_follow_catalogue_order() {
        let ids = default_widget_ids();
        assert_eq!(ids.len(), WidgetKind::ALL.len());
        assert_eq!(ids[0].as_str(), "balance");
        assert_eq!(ids[5].as_str(), "exchange");
    }

    #[test]
    fn every_kind_has_body_lines() {
        for kind in WidgetKind::ALL {
            assert!(!kind.body().is_empty(), "{kind} should have content");
        }
    }
}
