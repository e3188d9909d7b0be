use serde::Serialize;

/// Simple aggregate statistics for a result table.
///
/// Returned by [`ResultTable::stats`](crate::model::ResultTable::stats) and
/// carried in the [`RunReport`](crate::pipeline::RunReport).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub rows: usize,
    pub countries: usize,
}
