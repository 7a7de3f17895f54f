//! Column configuration store for the transfers table.
//!
//! The store holds an ordered, keyed set of column descriptors. It is
//! replaced wholesale whenever the column settings report a change and it
//! never validates what it receives: duplicate keys or gaps in `order` render
//! exactly as configured.

use serde::{Deserialize, Serialize};

/// Field of a [`crate::Transfer`] a column renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKey {
    Id,
    BeneficiaryName,
    Amount,
    Currency,
    Type,
    Status,
    Method,
    Fee,
    /// A key this build does not know how to render. The cell stays empty.
    #[serde(other)]
    Unknown,
}

/// One configurable column of the transfers table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub key: ColumnKey,
    pub label: String,
    pub visible: bool,
    /// Rank used for left-to-right placement. Need not be contiguous.
    pub order: i32,
}

impl ColumnDescriptor {
    pub fn new(key: ColumnKey, label: impl Into<String>, order: i32) -> Self {
        Self {
            key,
            label: label.into(),
            visible: true,
            order,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Towards the left edge of the table.
    Up,
    /// Towards the right edge of the table.
    Down,
}

/// The column set of one table session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferColumns {
    columns: Vec<ColumnDescriptor>,
}

impl Default for TransferColumns {
    fn default() -> Self {
        Self {
            columns: Self::default_columns(),
        }
    }
}

impl TransferColumns {
    /// The descriptor set a freshly mounted table starts with.
    pub fn default_columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new(ColumnKey::Id, "Transaction ID", 0),
            ColumnDescriptor::new(ColumnKey::BeneficiaryName, "Beneficiary Name", 1),
            ColumnDescriptor::new(ColumnKey::Amount, "Amount", 2),
            ColumnDescriptor::new(ColumnKey::Currency, "Currency", 3),
            ColumnDescriptor::new(ColumnKey::Type, "Type", 4),
            ColumnDescriptor::new(ColumnKey::Status, "Status", 5),
            ColumnDescriptor::new(ColumnKey::Method, "Method", 6),
            ColumnDescriptor::new(ColumnKey::Fee, "Fee", 7),
        ]
    }

    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self { columns }
    }

    /// All descriptors in the order they were supplied.
    pub fn all(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Replaces the whole set. No validation is performed.
    pub fn replace(&mut self, columns: Vec<ColumnDescriptor>) {
        log::debug!(
            "Replacing transfer table columns: {} descriptors, {} visible",
            columns.len(),
            columns.iter().filter(|c| c.visible).count()
        );
        self.columns = columns;
    }

    /// Visible descriptors, stable-sorted ascending by `order`.
    ///
    /// Ties keep the order in which they were supplied.
    pub fn visible(&self) -> Vec<&ColumnDescriptor> {
        let mut visible: Vec<&ColumnDescriptor> =
            self.columns.iter().filter(|c| c.visible).collect();
        visible.sort_by_key(|c| c.order);
        visible
    }

    /// Every descriptor, hidden ones included, stable-sorted by `order`.
    pub fn ordered(&self) -> Vec<&ColumnDescriptor> {
        let mut ordered: Vec<&ColumnDescriptor> = self.columns.iter().collect();
        ordered.sort_by_key(|c| c.order);
        ordered
    }

    /// A copy of the set with every descriptor matching `key` shown or hidden.
    pub fn with_visibility(&self, key: ColumnKey, visible: bool) -> Vec<ColumnDescriptor> {
        self.columns
            .iter()
            .cloned()
            .map(|mut column| {
                if column.key == key {
                    column.visible = visible;
                }
                column
            })
            .collect()
    }

    /// A copy of the set with `key` swapped with its nearest visible
    /// neighbour in `direction`.
    ///
    /// Orders are renumbered `0..n` following the resulting sequence. When
    /// there is no neighbour the set is returned renumbered but otherwise
    /// unchanged.
    pub fn moved(&self, key: ColumnKey, direction: MoveDirection) -> Vec<ColumnDescriptor> {
        let mut sorted = self.columns.clone();
        sorted.sort_by_key(|c| c.order);

        if let Some(from) = sorted.iter().position(|c| c.key == key) {
            let neighbour = match direction {
                MoveDirection::Up => sorted[..from].iter().rposition(|c| c.visible),
                MoveDirection::Down => sorted[from + 1..]
                    .iter()
                    .position(|c| c.visible)
                    .map(|offset| from + 1 + offset),
            };
            if let Some(to) = neighbour {
                sorted.swap(from, to);
            }
        }

        for (order, column) in (0_i32..).zip(sorted.iter_mut()) {
            column.order = order;
        }
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(columns: &[&ColumnDescriptor]) -> Vec<ColumnKey> {
        columns.iter().map(|c| c.key).collect()
    }

    #[test]
    fn test_default_columns_are_visible_and_ordered() {
        let columns = TransferColumns::default();

        assert_eq!(columns.all().len(), 8);
        assert!(columns.all().iter().all(|c| c.visible));
        let orders: Vec<i32> = columns.all().iter().map(|c| c.order).collect();
        assert_eq!(orders, (0..8).collect::<Vec<_>>());
        assert_eq!(columns.all()[0].label, "Transaction ID");
        assert_eq!(columns.all()[7].key, ColumnKey::Fee);
    }

    #[test]
    fn test_visible_filters_hidden_and_sorts_with_gaps() {
        let columns = TransferColumns::new(vec![
            ColumnDescriptor::new(ColumnKey::Fee, "Fee", 40),
            ColumnDescriptor {
                visible: false,
                ..ColumnDescriptor::new(ColumnKey::Currency, "Currency", 1)
            },
            ColumnDescriptor::new(ColumnKey::Id, "Transaction ID", 3),
            ColumnDescriptor::new(ColumnKey::Amount, "Amount", 17),
        ]);

        assert_eq!(
            keys(&columns.visible()),
            vec![ColumnKey::Id, ColumnKey::Amount, ColumnKey::Fee]
        );
    }

    #[test]
    fn test_visible_keeps_input_order_on_ties() {
        let columns = TransferColumns::new(vec![
            ColumnDescriptor::new(ColumnKey::Status, "Status", 2),
            ColumnDescriptor::new(ColumnKey::Type, "Type", 1),
            ColumnDescriptor::new(ColumnKey::Method, "Method", 2),
            ColumnDescriptor::new(ColumnKey::Amount, "Amount", 1),
        ]);

        assert_eq!(
            keys(&columns.visible()),
            vec![
                ColumnKey::Type,
                ColumnKey::Amount,
                ColumnKey::Status,
                ColumnKey::Method
            ]
        );
    }

    #[test]
    fn test_replace_passes_duplicates_through() {
        let mut columns = TransferColumns::default();
        columns.replace(vec![
            ColumnDescriptor::new(ColumnKey::Amount, "Amount", 0),
            ColumnDescriptor::new(ColumnKey::Amount, "Amount again", 0),
        ]);

        let visible = columns.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[1].label, "Amount again");
    }

    #[test]
    fn test_with_visibility_hides_column() {
        let columns = TransferColumns::default();
        let updated = TransferColumns::new(columns.with_visibility(ColumnKey::Currency, false));

        assert_eq!(updated.visible().len(), 7);
        assert!(!keys(&updated.visible()).contains(&ColumnKey::Currency));
        // The source set is untouched until replaced.
        assert_eq!(columns.visible().len(), 8);
    }

    #[test]
    fn test_moved_swaps_with_neighbour() {
        let columns = TransferColumns::default();
        let updated = TransferColumns::new(columns.moved(ColumnKey::Amount, MoveDirection::Up));

        let visible = keys(&updated.visible());
        assert_eq!(&visible[..3], &[
            ColumnKey::Id,
            ColumnKey::Amount,
            ColumnKey::BeneficiaryName
        ]);
    }

    #[test]
    fn test_moved_skips_hidden_neighbours() {
        let columns =
            TransferColumns::new(TransferColumns::default().with_visibility(ColumnKey::Currency, false));
        let updated = TransferColumns::new(columns.moved(ColumnKey::Amount, MoveDirection::Down));

        let visible = keys(&updated.visible());
        assert_eq!(&visible[2..4], &[ColumnKey::Type, ColumnKey::Amount]);
    }

    #[test]
    fn test_moved_at_edge_is_noop() {
        let columns = TransferColumns::default();
        let updated = columns.moved(ColumnKey::Id, MoveDirection::Up);

        assert_eq!(updated, TransferColumns::default_columns());
    }

    #[test]
    fn test_unknown_key_deserializes() {
        let column: ColumnDescriptor = serde_json::from_str(
            r#"{"key": "riskScore", "label": "Risk", "visible": true, "order": 9}"#,
        )
        .unwrap();
        assert_eq!(column.key, ColumnKey::Unknown);

        let column: ColumnDescriptor = serde_json::from_str(
            r#"{"key": "beneficiaryName", "label": "Name", "visible": false, "order": 1}"#,
        )
        .unwrap();
        assert_eq!(column.key, ColumnKey::BeneficiaryName);
    }
}
