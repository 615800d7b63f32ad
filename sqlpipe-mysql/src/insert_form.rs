use sqlpipe_connector::{FlushPolicy, InsertForm, StandardInsertForm};

/// MySQL's documented batch-size ceiling: flush once the accumulated
/// INSERT text reaches 4 MB.
pub struct MysqlInsertForm(StandardInsertForm);

impl Default for MysqlInsertForm {
    fn default() -> Self {
        Self(StandardInsertForm {
            flush_policy: FlushPolicy::ByteLength(4_000_000),
        })
    }
}

impl InsertForm for MysqlInsertForm {
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
    fn default_flushes_at_four_megabytes() {
        let form = MysqlInsertForm::default();
        match form.flush_policy() {
            FlushPolicy::ByteLength(n) => assert_eq!(n, 4_000_000),
            other => panic!("expected ByteLength, got {other:?}"),
        }
    }
}
