use log::debug;
use sqlpipe_connector::{
    BatchBuilder, CancellationToken, DdlDialect, Error, FormatDialect, InsertForm, Result, SourceConnector,
    TargetConnector, TransferRequest,
};
use sqlpipe_types::Value;

/// Summary of one completed transfer, returned for logging/testing; not part
/// of the engine's external contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferReport {
    pub rows_transferred: usize,
    pub batches_flushed: usize,
}

/// Runs the linear sequence from §4.6: optional drop, pump first row's
/// column metadata, optional create, pump+encode+append+maybe-flush loop,
/// final flush. Generic over the source/target pair and the target's DDL,
/// format and INSERT-shape dialects, so one coordinator body serves every
/// engine combination.
#[allow(clippy::too_many_arguments)]
pub async fn run_transfer(
    request: &TransferRequest,
    source: &mut dyn SourceConnector,
    target: &mut dyn TargetConnector,
    ddl: &dyn DdlDialect,
    format: &dyn FormatDialect,
    form: &dyn InsertForm,
    cancel: &CancellationToken,
) -> Result<TransferReport> {
    if request.drop_target_table {
        let stmt = ddl.drop_table(request.target_schema.as_deref(), &request.target_table);
        debug!("running drop: {stmt}");
        if let Err(e) = run_ddl(target, &stmt, cancel).await {
            if !matches!(&e, Error::TargetDdlError(msg) if ddl.is_missing_table_error(msg)) {
                return Err(e);
            }
        }
    }

    let mut cursor = source
        .open_cursor(&request.query)
        .await
        .map_err(|e| Error::SourceIoError(e.to_string()))?;
    let columns = cursor.columns().to_vec();

    if request.create_target_table {
        let stmt = ddl.create_table(request.target_schema.as_deref(), &request.target_table, &columns);
        debug!("running create: {stmt}");
        run_ddl(target, &stmt, cancel).await?;
    }

    let table = qualified_table(request.target_schema.as_deref(), &request.target_table);
    let column_names: Vec<String> = columns.iter().map(|c| c.name.clone()).collect();
    let mut builder = BatchBuilder::new(form, table, column_names);

    let mut buf: Vec<Value> = vec![Value::Null; columns.len()];
    let mut report = TransferReport::default();

    loop {
        if cancel.is_cancelled() {
            break;
        }
        let has_row = cursor
            .next_row(&mut buf)
            .await
            .map_err(|e| Error::SourceIoError(e.to_string()))?;
        if !has_row {
            break;
        }

        let mut row = String::new();
        let last = columns.len() - 1;
        for (i, col) in columns.iter().enumerate() {
            let terminator = if i == last { form.row_terminator() } else { "," };
            row.push_str(&format.format(col.intermediate_type, &buf[i], terminator)?);
        }

        report.rows_transferred += 1;
        if builder.push_row(&row) {
            flush(&mut builder, target, "mid-batch", &mut report, cancel).await?;
        }
    }

    if !builder.is_empty() {
        flush(&mut builder, target, "batch-end", &mut report, cancel).await?;
    }

    Ok(report)
}

async fn run_ddl(target: &mut dyn TargetConnector, stmt: &str, cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        return Ok(());
    }
    target.execute(stmt).await.map_err(|e| Error::TargetDdlError(e.to_string()))
}

async fn flush(
    builder: &mut BatchBuilder<'_>,
    target: &mut dyn TargetConnector,
    stage: &'static str,
    report: &mut TransferReport,
    cancel: &CancellationToken,
) -> Result<()> {
    let stmt = builder.take_and_reset();
    if cancel.is_cancelled() {
        return Ok(());
    }
    target
        .execute(&stmt)
        .await
        .map_err(|e| Error::TargetInsertError {
            stage,
            reason: e.to_string(),
        })?;
    report.batches_flushed += 1;
    Ok(())
}

fn qualified_table(schema: Option<&str>, table: &str) -> String {
    match schema {
        Some(s) => format!("{s}.{table}"),
        None => table.to_string(),
    }
}
