mod support_center;
mod transfer_details;
pub mod transfer_table;

pub use support_center::{CALL_US_LABEL, SUPPORT_LABEL, support_center};
pub use transfer_details::{CLOSE_LABEL, transfer_details};
pub use transfer_table::{
    TransferTableEvent, TransferTableState, VIEW_DETAILS_LABEL, transfer_table,
};
