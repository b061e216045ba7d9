//! The dashboard's resource catalogue.
//!
//! One module per backend resource, each pairing a typed row with a unit
//! struct implementing [`Resource`](crate::Resource). Field names differ
//! per resource on the wire (the vNUBAN endpoint calls the account number
//! `accountNo`, transactions call it `vnuban`); the mapping tables here
//! absorb those differences so every table sees a uniform row shape.

mod api_logs;
mod audit;
mod customers;
mod merchants;
mod payouts;
mod transactions;
mod vnubans;

pub use api_logs::{ApiLogRow, ApiLogs};
pub use audit::{AuditLogs, AuditRow};
pub use customers::{CustomerRow, Customers};
pub use merchants::{MerchantRow, Merchants};
pub use payouts::{PayoutRow, Payouts};
pub use transactions::{TransactionRow, Transactions};
pub use vnubans::{VnubanRow, Vnubans};
