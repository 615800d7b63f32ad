/// How a target decides a batch is full enough to flush.
///
/// PostgreSQL and MySQL use a byte-length ceiling on the accumulated INSERT
/// text; MSSQL and Snowflake use a row count. The spec's byte-length check is
/// `len % N == 0`, a cheap approximation that is only correct because it is
/// checked after every row append; this implementation uses the
/// documented-preferred `len >= N` substitution instead (see DESIGN.md).
#[derive(Debug, Clone, Copy)]
pub enum FlushPolicy {
    RowCount(usize),
    ByteLength(usize),
}

impl FlushPolicy {
    fn should_flush(self, rows_in_batch: usize, buf_len: usize) -> bool {
        match self {
            FlushPolicy::RowCount(n) => rows_in_batch >= n,
            FlushPolicy::ByteLength(n) => buf_len >= n,
        }
    }
}

/// The per-target shape of an INSERT statement. Every non-Oracle target uses
/// [`StandardInsertForm`]; Oracle's `dual`-union form implements this trait
/// itself (`sqlpipe_oracle::OracleInsertForm`) since Oracle predates the
/// multi-row-VALUES INSERT syntax.
pub trait InsertForm {
    /// Written once, when the first row of a fresh batch arrives.
    fn opening(&self, table: &str, columns: &[String]) -> String;
    /// Written before a row's first value. `is_first_row_in_batch` is true
    /// only for the very first row after [`InsertForm::opening`].
    fn row_prefix(&self, is_first_row_in_batch: bool) -> &'static str;
    /// Terminator passed to the value formatter for a row's last column.
    fn row_terminator(&self) -> &'static str;
    /// Called once at flush time, after the last row has been written, to
    /// close the statement. Default: no-op (every non-Oracle target already
    /// closed its last row with a `)`).
    fn finish(&self, _buf: &mut String, _table: &str) {}
    fn flush_policy(&self) -> FlushPolicy;
}

/// The `insert into t (c1,c2) values (v1,v2),(v3,v4)` form used by every
/// target except Oracle.
pub struct StandardInsertForm {
    pub flush_policy: FlushPolicy,
}

impl InsertForm for StandardInsertForm {
    fn opening(&self, table: &str, columns: &[String]) -> String {
        format!("insert into {} ({}) values ", table, columns.join(","))
    }

    fn row_prefix(&self, is_first_row_in_batch: bool) -> &'static str {
        if is_first_row_in_batch {
            "("
        } else {
            ",("
        }
    }

    fn row_terminator(&self) -> &'static str {
        ")"
    }

    fn flush_policy(&self) -> FlushPolicy {
        self.flush_policy
    }
}

/// Builds one multi-row INSERT statement, flushing it to the target when a
/// per-target threshold is hit. Implements the state machine from the
/// component design: `Empty` has nothing pending; `Open` has at least one
/// row written and not yet flushed.
pub struct BatchBuilder<'a> {
    form: &'a dyn InsertForm,
    table: String,
    columns: Vec<String>,
    buf: String,
    rows_in_batch: usize,
    open: bool,
}

impl<'a> BatchBuilder<'a> {
    pub fn new(form: &'a dyn InsertForm, table: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            form,
            table: table.into(),
            columns,
            buf: String::new(),
            rows_in_batch: 0,
            open: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.open
    }

    /// Append one already-formatted row (the caller formats each value with
    /// [`InsertForm::row_terminator`] on the last column). Returns `true` if
    /// the flush threshold was hit and the caller should flush now.
    pub fn push_row(&mut self, formatted_row: &str) -> bool {
        if !self.open {
            self.buf.push_str(&self.form.opening(&self.table, &self.columns));
            self.open = true;
        }
        self.buf.push_str(self.form.row_prefix(self.rows_in_batch == 0));
        self.buf.push_str(formatted_row);
        self.rows_in_batch += 1;

        self.form
            .flush_policy()
            .should_flush(self.rows_in_batch, self.buf.len())
    }

    /// Produce the statement to execute and reset the builder to `Empty`.
    /// Panics if called while `Empty` - callers must check [`Self::is_empty`]
    /// (cursor-exhausted-with-no-rows is a documented no-op, not a flush).
    pub fn take_and_reset(&mut self) -> String {
        assert!(self.open, "take_and_reset called on an empty batch");
        self.form.finish(&mut self.buf, &self.table);
        let stmt = std::mem::take(&mut self.buf);
        self.rows_in_batch = 0;
        self.open = false;
        stmt
    }

    pub fn row_terminator(&self) -> &'static str {
        self.form.row_terminator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> StandardInsertForm {
        StandardInsertForm {
            flush_policy: FlushPolicy::RowCount(2),
        }
    }

    #[test]
    fn empty_is_empty_until_first_row() {
        let form = form();
        let b = BatchBuilder::new(&form, "t", vec!["a".into(), "b".into()]);
        assert!(b.is_empty());
    }

    #[test]
    fn flush_threshold_fires_at_row_count() {
        let form = form();
        let mut b = BatchBuilder::new(&form, "t", vec!["a".into()]);
        // push_row takes the formatted columns of one row, terminator already
        // applied to the last column; BatchBuilder supplies the leading `(`/`,(`.
        assert!(!b.push_row("1)"));
        assert!(b.push_row("2)"));
        let stmt = b.take_and_reset();
        assert_eq!(stmt, "insert into t (a) values (1),(2)");
        assert!(b.is_empty());
    }

    #[test]
    fn batching_is_idempotent_across_split_points() {
        // Flushing after every row vs. flushing once at the end produces the
        // same sequence of inserted row literals regardless of where the
        // splits land.
        let form_all_at_once = StandardInsertForm {
            flush_policy: FlushPolicy::RowCount(100),
        };
        let form_per_row = StandardInsertForm {
            flush_policy: FlushPolicy::RowCount(1),
        };

        let rows = ["1)", "2)", "3)"];

        let mut a = BatchBuilder::new(&form_all_at_once, "t", vec!["x".into()]);
        let mut flushed_a = vec![];
        for r in rows {
            if a.push_row(r) {
                flushed_a.push(a.take_and_reset());
            }
        }
        if !a.is_empty() {
            flushed_a.push(a.take_and_reset());
        }

        let mut b = BatchBuilder::new(&form_per_row, "t", vec!["x".into()]);
        let mut flushed_b = vec![];
        for r in rows {
            if b.push_row(r) {
                flushed_b.push(b.take_and_reset());
            }
        }
        if !b.is_empty() {
            flushed_b.push(b.take_and_reset());
        }

        // Compare the sequence of row literals each strategy produced,
        // ignoring how they were grouped into separate flushed statements.
        let extract_values = |stmts: &[String]| -> Vec<String> {
            stmts
                .iter()
                .flat_map(|s| {
                    s.split("values ")
                        .nth(1)
                        .unwrap_or("")
                        .trim_start_matches('(')
                        .trim_end_matches(')')
                        .split("),(")
                        .map(str::to_owned)
                        .collect::<Vec<_>>()
                })
                .collect()
        };

        assert_eq!(extract_values(&flushed_a), extract_values(&flushed_b));
    }
}
