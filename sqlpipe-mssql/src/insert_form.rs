use sqlpipe_connector::{FlushPolicy, InsertForm, StandardInsertForm};

/// MSSQL's documented batch-size ceiling: flush every 1000 rows.
pub struct MssqlInsertForm(StandardInsertForm);

impl Default for MssqlInsertForm {
    fn default() -> Self {
        Self(StandardInsertForm {
            flush_policy: FlushPolicy::RowCount(1000),
        })
    }
}

impl InsertForm for MssqlInsertForm {
    fn opening(&self, table: &str, columns: &[String]) -> String {
        self.0.opening(table, columns)
    }

    fn row_prefix(&self, is_first_row_in_batch: bool) -> &'static str {
        self.0.row_prefix(is_first_row_in_batch)
    }

    fn row_terminator(&self) -> &'static str {
        self.0.row_terminator()
    }

    fn flush_policy(&self) -> FlushPolicy {
        self.0.flush_policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flushes_every_thousand_rows() {
        let form = MssqlInsertForm::default();
        match form.flush_policy() {
            FlushPolicy::RowCount(n) => assert_eq!(n, 1000),
            other => panic!("expected RowCount, got {other:?}"),
        }
    }
}
