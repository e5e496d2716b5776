use super::*;

// Three KeepAlive message records back to back.
static THREE_RECORDS: &[u8] = &[
    0x02, 0x01, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01, 0x02, 0x01, 0x00, 0x04,
    0x00, 0x00, 0x00, 0x02, 0x02, 0x01, 0x00, 0x04, 0x00, 0x00, 0x00, 0x03,
];

#[test]
fn test_framer_exhaustion() {
    let buf = Bytes::from_static(THREE_RECORDS);
    let records: Vec<_> = INNER_FRAMER
        .records(buf)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(records.len(), 3);
    for (n, record) in records.iter().enumerate() {
        assert_eq!(record.len(), 8);
        assert_eq!(record[7], n as u8 + 1);
    }
}

#[test]
fn test_framer_truncated_body() {
    // Same stream with the last record's body cut short by one byte.
    let buf =
        Bytes::from_static(&THREE_RECORDS[..THREE_RECORDS.len() - 1]);
    let mut records = INNER_FRAMER.records(buf);

    assert!(records.next().unwrap().is_ok());
    assert!(records.next().unwrap().is_ok());
    assert_eq!(
        records.next().unwrap().unwrap_err(),
        DecodeError::TruncatedStream {
            expected: 8,
            available: 7,
        }
    );
    // The iterator is fused after a failure.
    assert!(records.next().is_none());
}

#[test]
fn test_framer_truncated_header() {
    let buf = Bytes::from_static(&THREE_RECORDS[..2]);
    let mut records = INNER_FRAMER.records(buf);
    assert_eq!(
        records.next().unwrap().unwrap_err(),
        DecodeError::TruncatedStream {
            expected: 4,
            available: 2,
        }
    );
}

#[test]
fn test_framer_empty() {
    let mut records = INNER_FRAMER.records(Bytes::new());
    assert!(records.next().is_none());
}

#[tokio::test]
async fn test_framer_read_record() {
    let mut stream = THREE_RECORDS;
    let mut count = 0;
    while let Some(record) =
        INNER_FRAMER.read_record(&mut stream).await.unwrap()
    {
        count += 1;
        assert_eq!(record.len(), 8);
        assert_eq!(record[7], count as u8);
    }
    assert_eq!(count, 3);
}

#[tokio::test]
async fn test_framer_read_record_truncated() {
    let mut stream = &THREE_RECORDS[..THREE_RECORDS.len() - 1];
    assert!(INNER_FRAMER.read_record(&mut stream).await.is_ok());
    assert!(INNER_FRAMER.read_record(&mut stream).await.is_ok());
    assert_eq!(
        INNER_FRAMER.read_record(&mut stream).await.unwrap_err(),
        DecodeError::TruncatedStream {
            expected: 8,
            available: 7,
        }
    );
}
