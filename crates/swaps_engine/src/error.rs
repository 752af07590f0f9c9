//! The engine-level error taxonomy.
//!
//! Every stage failure propagates unchanged to the boundary; nothing inside
//! the pipeline retries or swallows, because the stages are pure functions
//! over already-fetched data. The variants keep the originating condition's
//! structure so a caller can distinguish "no backing table" from "the
//! selection matched nothing" from "the source data is broken".

use thiserror::Error;

use swaps_core::table::TableError;
use swaps_core::types::SelectorError;
use swaps_store::StoreError;

/// Errors surfaced by the query operations.
///
/// # Variants
/// - `NotFound`: The requested category has no backing table or sheet
/// - `EmptyResult`: Filters or windowing narrowed the selection to zero rows
/// - `AmbiguousCell`: A pivot found two source values for one output cell
/// - `Selector`: A categorical value outside the known enumeration
/// - `Table`: A schema-level defect in the source table
///
/// # Examples
/// ```
/// use swaps_engine::QueryError;
///
/// let err = QueryError::AmbiguousCell {
///     row_key: "2025-04-15".to_string(),
///     column: "ois_2s10s".to_string(),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Ambiguous cell: more than one source value for column ois_2s10s at key 2025-04-15"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// The requested category has no backing table or sheet.
    #[error("No data found for key {key}, sheet {sheet}")]
    NotFound {
        /// The resolved store key
        key: String,
        /// The requested sheet name
        sheet: String,
    },

    /// Filters or windowing narrowed the selection to zero rows.
    ///
    /// The detail spells out the filter values that produced the empty
    /// selection. Distinct from `NotFound`: the table exists.
    #[error("Empty result: {detail}")]
    EmptyResult {
        /// The filter values that produced the empty selection
        detail: String,
    },

    /// A pivot found more than one source value for a single output cell.
    ///
    /// This is a data-integrity violation in the source, never resolved
    /// silently; financial figures must not be overwritten or averaged.
    #[error("Ambiguous cell: more than one source value for column {column} at key {row_key}")]
    AmbiguousCell {
        /// The row-key value of the colliding cell
        row_key: String,
        /// The output column name of the colliding cell
        column: String,
    },

    /// A categorical selector outside the known enumeration.
    #[error(transparent)]
    Selector(#[from] SelectorError),

    /// A schema-level defect in the source table.
    #[error(transparent)]
    Table(#[from] TableError),
}

impl From<StoreError> for QueryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { key, sheet } => QueryError::NotFound { key, sheet },
        }
    }
}
