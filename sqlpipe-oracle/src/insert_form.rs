use sqlpipe_connector::{FlushPolicy, InsertForm};

const ROW_JOINER: &str = " FROM dual UNION ALL ";
const UNION_ALL: &str = " UNION ALL ";

/// Oracle predates multi-row `VALUES` lists, so a batch is built as
/// `insert into t (c) with t_to_insert (c) as ( SELECT v1 FROM dual UNION ALL
/// SELECT v2 FROM dual ... ) SELECT * FROM t_to_insert` instead of the
/// `StandardInsertForm`'s `values (v1),(v2)`.
pub struct OracleInsertForm {
    pub flush_policy: FlushPolicy,
}

impl Default for OracleInsertForm {
    /// Oracle's documented batch-size ceiling: flush once the accumulated
    /// statement text passes 10000 bytes (`insertChecker`'s `currentLen >
    /// 10000`).
    fn default() -> Self {
        Self {
            flush_policy: FlushPolicy::ByteLength(10_000),
        }
    }
}

impl InsertForm for OracleInsertForm {
    fn opening(&self, table: &str, columns: &[String]) -> String {
        let cols = columns.join(", ");
        format!("insert into {table} ({cols}) with {table}_to_insert ({cols}) as ( SELECT ")
    }

    fn row_prefix(&self, is_first_row_in_batch: bool) -> &'static str {
        if is_first_row_in_batch {
            ""
        } else {
            "SELECT "
        }
    }

    fn row_terminator(&self) -> &'static str {
        ROW_JOINER
    }

    fn finish(&self, buf: &mut String, table: &str) {
        // Every row ends with `ROW_JOINER`; strip only the trailing
        // `UNION ALL` so the last row keeps its own `FROM dual` - Oracle
        // requires a `FROM` clause on every `SELECT`.
        if buf.ends_with(UNION_ALL) {
            buf.truncate(buf.len() - UNION_ALL.len());
        }
        buf.push_str(&format!(") SELECT * FROM {table}_to_insert"));
    }

    fn flush_policy(&self) -> FlushPolicy {
        self.flush_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlpipe_connector::BatchBuilder;

    #[test]
    fn two_rows_produce_a_dual_union_cte() {
        let form = OracleInsertForm {
            flush_policy: FlushPolicy::RowCount(100),
        };
        let mut b = BatchBuilder::new(&form, "widgets", vec!["a".into(), "b".into()]);
        b.push_row(&format!("1,2{ROW_JOINER}"));
        b.push_row(&format!("3,4{ROW_JOINER}"));
        let stmt = b.take_and_reset();
        assert_eq!(
            stmt,
            "insert into widgets (a, b) with widgets_to_insert (a, b) as ( SELECT 1,2 FROM dual UNION ALL SELECT 3,4 FROM dual) SELECT * FROM widgets_to_insert"
        );
    }

    #[test]
    fn default_flushes_at_ten_thousand_bytes() {
        let form = OracleInsertForm::default();
        match form.flush_policy() {
            FlushPolicy::ByteLength(n) => assert_eq!(n, 10_000),
            other => panic!("expected ByteLength, got {other:?}"),
        }
    }

    #[test]
    fn single_row_still_closes_cleanly() {
        let form = OracleInsertForm {
            flush_policy: FlushPolicy::RowCount(100),
        };
        let mut b = BatchBuilder::new(&form, "widgets", vec!["a".into()]);
        b.push_row(&format!("1{ROW_JOINER}"));
        let stmt = b.take_and_reset();
        assert_eq!(
            stmt,
            "insert into widgets (a) with widgets_to_insert (a) as ( SELECT 1 FROM dual) SELECT * FROM widgets_to_insert"
        );
    }
}
