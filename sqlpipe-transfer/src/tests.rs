use sqlpipe_connector::{CancellationToken, Error, TransferRequest};
use sqlpipe_types::{ColumnMeta, IntermediateType, ScanType, System, TypeKind, Value};

use sqlpipe_mssql::MssqlInsertForm;

use crate::fakes::{row_count_form, FakeDdl, FakeFormat, FakeSource, FakeTarget};
use crate::run_transfer;

fn int_column(name: &str) -> ColumnMeta {
    ColumnMeta::new(
        name,
        "INT4",
        IntermediateType::new(System::PostgreSql, "INT4", TypeKind::Int),
        ScanType::Int64,
        0,
        0,
        0,
        true,
    )
}

fn request() -> TransferRequest {
    TransferRequest {
        query: "select * from t".into(),
        target_schema: None,
        target_table: "t".into(),
        drop_target_table: false,
        create_target_table: false,
    }
}

#[tokio::test]
async fn e2_batch_counts_match_row_count_threshold() {
    let columns = vec![int_column("a"), int_column("b"), int_column("c")];
    let rows: Vec<Vec<Value>> = (0..3500).map(|i| vec![Value::I64(i), Value::I64(i), Value::I64(i)]).collect();
    let mut source = FakeSource { columns, rows };
    let mut target = FakeTarget::default();
    let ddl = FakeDdl;
    let format = FakeFormat;
    let form = MssqlInsertForm::default();
    let cancel = CancellationToken::new();

    let report = run_transfer(&request(), &mut source, &mut target, &ddl, &format, &form, &cancel)
        .await
        .unwrap();

    assert_eq!(report.rows_transferred, 3500);
    assert_eq!(report.batches_flushed, 4);
    assert_eq!(target.executed.len(), 4);
    let row_counts: Vec<usize> = target
        .executed
        .iter()
        .map(|s| s.matches("),(").count() + 1)
        .collect();
    assert_eq!(row_counts, vec![1000, 1000, 1000, 500]);
}

#[tokio::test]
async fn e3_empty_result_set_with_create_runs_create_and_no_inserts() {
    let columns = vec![int_column("a")];
    let mut source = FakeSource { columns, rows: vec![] };
    let mut target = FakeTarget::default();
    let ddl = FakeDdl;
    let format = FakeFormat;
    let form = row_count_form(1000);
    let cancel = CancellationToken::new();

    let mut req = request();
    req.create_target_table = true;

    let report = run_transfer(&req, &mut source, &mut target, &ddl, &format, &form, &cancel)
        .await
        .unwrap();

    assert_eq!(report.rows_transferred, 0);
    assert_eq!(report.batches_flushed, 0);
    assert_eq!(target.executed.len(), 1);
    assert!(target.executed[0].starts_with("create table"));
}

#[tokio::test]
async fn e5_mid_batch_insert_failure_leaves_prior_batches_and_surfaces_prefix() {
    let columns = vec![int_column("a")];
    let rows: Vec<Vec<Value>> = (0..5).map(|i| vec![Value::I64(i)]).collect();
    let mut source = FakeSource { columns, rows };
    let mut target = FakeTarget {
        fail_on_execution: Some(2),
        ..Default::default()
    };
    let ddl = FakeDdl;
    let format = FakeFormat;
    let form = row_count_form(1);
    let cancel = CancellationToken::new();

    let err = run_transfer(&request(), &mut source, &mut target, &ddl, &format, &form, &cancel)
        .await
        .unwrap_err();

    assert_eq!(target.executed.len(), 1);
    match err {
        Error::TargetInsertError { stage, .. } => assert_eq!(stage, "mid-batch"),
        other => panic!("expected TargetInsertError, got {other:?}"),
    }
}

#[tokio::test]
async fn ordering_is_preserved_across_batches() {
    let columns = vec![int_column("k")];
    let rows: Vec<Vec<Value>> = (0..10).map(|i| vec![Value::I64(i)]).collect();
    let mut source = FakeSource { columns, rows };
    let mut target = FakeTarget::default();
    let ddl = FakeDdl;
    let format = FakeFormat;
    let form = row_count_form(3);
    let cancel = CancellationToken::new();

    run_transfer(&request(), &mut source, &mut target, &ddl, &format, &form, &cancel)
        .await
        .unwrap();

    let keys: Vec<i64> = target
        .executed
        .join("")
        .split(|c: char| !c.is_ascii_digit() && c != '-')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(keys, (0..10).collect::<Vec<_>>());
}
