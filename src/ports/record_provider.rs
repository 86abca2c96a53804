//! Record source port trait.

use crate::domain::error::FinanceError;
use crate::domain::record::FinancialRecord;

/// Supplies the current record set. Implementations hand back an immutable
/// snapshot so concurrent readers never observe a partial update.
pub trait RecordProvider {
    fn records(&self) -> Result<Vec<FinancialRecord>, FinanceError>;

    /// Short label used in logs.
    fn describe(&self) -> String {
        "records".to_string()
    }
}
