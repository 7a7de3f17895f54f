//! Column widths for the transfers table.

use egui_extras::Column;
use payops_business::ColumnKey;

pub const ROW_HEIGHT: f32 = 40.0;
pub const HEADER_HEIGHT: f32 = 24.0;
pub const ACTIONS_WIDTH: f32 = 70.0;

/// Width policy of a configurable column.
#[inline]
pub fn column_for(key: ColumnKey) -> Column {
    match key {
        ColumnKey::Id => Column::auto().at_least(110.0),
        ColumnKey::BeneficiaryName => Column::auto().at_least(150.0).resizable(true),
        ColumnKey::Amount => Column::auto().at_least(120.0),
        ColumnKey::Currency | ColumnKey::Method => Column::auto().at_least(70.0),
        ColumnKey::Type | ColumnKey::Status => Column::auto().at_least(90.0),
        ColumnKey::Fee => Column::auto().at_least(60.0),
        ColumnKey::Unknown => Column::auto(),
    }
}

/// The trailing actions column, present regardless of configuration.
#[inline]
pub fn actions_column() -> Column {
    Column::exact(ACTIONS_WIDTH)
}
