//! Literal per-state data, in catalog order.

pub mod puducherry;
pub mod tamil_nadu;
pub mod telangana;

use super::types::StateRecord;

pub fn all() -> Vec<StateRecord> {
    vec![
        telangana::record(),
        tamil_nadu::record(),
        puducherry::record(),
    ]
}
