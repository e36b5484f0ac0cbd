use snowport_convert::{convert_transactions, write_snowball, write_snowball_csv, ConversionSummary};
use snowport_core::Error;
use snowport_ingest::{read_scalable_capital, read_scalable_capital_csv};
use std::path::PathBuf;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("testdata")
        .join("scalable_capital.csv")
}

fn convert_sample() -> Vec<u8> {
    let rows = read_scalable_capital_csv(sample_path()).unwrap();
    let txns = convert_transactions(&rows).unwrap();
    let mut buf = Vec::new();
    write_snowball(&mut buf, &txns).unwrap();
    buf
}

/// Real-shape regression: every supported event type plus a padding line.
#[test]
fn test_sample_export_output() {
    let text = String::from_utf8(convert_sample()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Event,Date,Symbol,Price,Quantity,Currency,FeeTax,Exchange,FeeCurrency,DoNotAdjustCash,Note",
            "CASH_IN,2023-01-02 08:15:00,,1,1500,EUR,0,,EUR,False,Deposit - Executed - DEP-0001",
            "BUY,2023-01-05 09:00:00,DE000,12.5,10,EUR,1.5,,EUR,False,Apple - Executed - R1",
            "FEE,2023-01-31 23:59:00,,0,0,EUR,-4.99,,EUR,False,Prime Broker fee - Executed - FEE-2023-01",
            "DIVIDEND,2023-03-01 10:00:00,IE00B4L5Y983,0,3.21,EUR,0.8,,EUR,False,\"iShares Core MSCI World, Dist - Executed - R9\"",
            "BUY,2023-04-12 14:30:05,IE00BK5BQT80,1050.25,\"2,5\",EUR,0.99,,EUR,False,Vanguard FTSE All-World - Pending - R10",
        ]
    );
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    assert_eq!(convert_sample(), convert_sample());
}

#[test]
fn test_summary_of_sample() {
    let rows = read_scalable_capital_csv(sample_path()).unwrap();
    let txns = convert_transactions(&rows).unwrap();
    let summary = ConversionSummary::new(&txns, rows.len() - txns.len());
    assert_eq!(summary.total(), 5);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.counts.get("BUY"), Some(&2));
    assert_eq!(summary.counts.get("FEE"), Some(&1));
}

#[test]
fn test_unknown_type_aborts_whole_export() {
    let text = "date;time;status;reference;description;assetType;type;isin;shares;price;amount;fee;tax;currency\n\
                2023-01-02;08:15:00;Executed;D1;Deposit;Cash;Deposit;;;;100,00;;;EUR\n\
                2023-02-02;08:15:00;Executed;W1;Withdrawal;Cash;Withdrawal;;;;-50,00;;;EUR\n";
    let rows = read_scalable_capital(text.as_bytes()).unwrap();
    let err = convert_transactions(&rows).unwrap_err();
    assert!(matches!(err, Error::AtLine { line: 3, .. }), "{err:?}");
    match err.root() {
        Error::UnknownEventType(t) => assert_eq!(t, "Withdrawal"),
        other => panic!("expected UnknownEventType, got {other:?}"),
    }
}

#[test]
fn test_write_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("snowball.csv");
    let rows = read_scalable_capital_csv(sample_path()).unwrap();
    let txns = convert_transactions(&rows).unwrap();

    write_snowball_csv(&out, &txns).unwrap();

    let written = std::fs::read(&out).unwrap();
    assert_eq!(written, convert_sample());
}
