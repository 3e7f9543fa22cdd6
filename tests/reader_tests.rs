//! Reader session tests: strict and failsafe modes, header checks and the
//! parallel decode path

mod common;

use common::builders::{raw_multi_part_body, ShpFileBuilder};
use shprust::notification::NotificationType;
use shprust::{Geometry, ShapeType, ShpError, ShpReader, ShpReaderConfiguration, Vector2};

fn failsafe() -> ShpReaderConfiguration {
    ShpReaderConfiguration { failsafe: true }
}

#[test]
fn test_read_points() {
    let bytes = ShpFileBuilder::new(1).point(10.0, 20.0).point(-1.0, 2.5).build();
    let ds = ShpReader::from_bytes(bytes).unwrap().read().unwrap();

    assert_eq!(ds.header().shape_type, ShapeType::Point);
    assert!(ds.notifications().is_empty());
    let wkt: Vec<&str> = ds.wkt_strings().collect();
    assert_eq!(
        wkt,
        vec!["POINT (10.000000 20.000000)", "POINT (-1.000000 2.500000)"]
    );
    assert_eq!(ds.records()[1].record_number(), 2);
}

#[test]
fn test_unrecognized_header_shape_type_is_kept() {
    let reader = ShpReader::from_bytes(ShpFileBuilder::new(99).build()).unwrap();
    assert_eq!(reader.header().shape_type, ShapeType::Unknown(99));
    assert_eq!(reader.header().file_length_bytes(), 100);
}

#[test]
fn test_null_records_are_omitted() {
    let bytes = ShpFileBuilder::new(1).null().point(1.0, 1.0).null().build();
    let ds = ShpReader::from_bytes(bytes).unwrap().read().unwrap();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.records()[0].record_number(), 2);
}

#[test]
fn test_unsupported_record_keeps_alignment() {
    let bytes = ShpFileBuilder::new(1)
        .record(31, &[0xAB; 56])
        .point(10.0, 20.0)
        .build();
    let ds = ShpReader::from_bytes(bytes).unwrap().read().unwrap();

    assert_eq!(ds.len(), 2);
    assert!(ds.records()[0].geometry().is_none());
    assert_eq!(ds.records()[0].shape_type(), ShapeType::MultiPatch);
    assert_eq!(
        ds.records()[1].geometry(),
        Some(&Geometry::Point(Vector2::new(10.0, 20.0)))
    );
    assert!(ds.notifications().has_type(NotificationType::NotSupported));
}

#[test]
fn test_oversized_body_is_skipped() {
    // A point record padded with trailing bytes still ends where declared.
    let mut body = 1.0f64.to_le_bytes().to_vec();
    body.extend_from_slice(&2.0f64.to_le_bytes());
    body.extend_from_slice(&[0xFF; 8]);
    let bytes = ShpFileBuilder::new(1).record(1, &body).point(3.0, 4.0).build();
    let ds = ShpReader::from_bytes(bytes).unwrap().read().unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.records()[1].wkt(), Some("POINT (3.000000 4.000000)"));
}

#[test]
fn test_truncated_record_strict() {
    let mut bytes = ShpFileBuilder::new(1).point(1.0, 2.0).point(3.0, 4.0).build();
    bytes.truncate(bytes.len() - 4);
    let err = ShpReader::from_bytes(bytes).unwrap().read().unwrap_err();
    assert!(err.is_truncation());
}

#[test]
fn test_truncated_record_failsafe() {
    let mut bytes = ShpFileBuilder::new(1).point(1.0, 2.0).point(3.0, 4.0).build();
    bytes.truncate(bytes.len() - 4);
    let ds = ShpReader::from_bytes(bytes)
        .unwrap()
        .with_configuration(failsafe())
        .read()
        .unwrap();
    assert_eq!(ds.len(), 1);
    assert!(ds.notifications().has_type(NotificationType::Error));
}

#[test]
fn test_malformed_record_failsafe_continues() {
    let bad = raw_multi_part_body(&[0, 3, 1], 4, &[(0.0, 0.0); 4]);
    let bytes = ShpFileBuilder::new(3).record(3, &bad).point(5.0, 6.0).build();

    let strict = ShpReader::from_bytes(bytes.clone()).unwrap().read();
    assert!(matches!(strict, Err(ShpError::MalformedGeometry(_))));

    let ds = ShpReader::from_bytes(bytes)
        .unwrap()
        .with_configuration(failsafe())
        .read()
        .unwrap();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.records()[0].record_number(), 2);
    let errors = ds.notifications().of_type(NotificationType::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].record_number, Some(1));
}

#[test]
fn test_strict_error_then_continue() {
    let bad = raw_multi_part_body(&[0], -1, &[]);
    let bytes = ShpFileBuilder::new(3).record(3, &bad).point(5.0, 6.0).build();
    let mut reader = ShpReader::from_bytes(bytes).unwrap();

    assert!(reader.next_record().is_err());
    let next = reader.next_record().unwrap().unwrap();
    assert_eq!(next.wkt(), Some("POINT (5.000000 6.000000)"));
    assert!(reader.next_record().unwrap().is_none());
}

#[test]
fn test_header_warnings() {
    let mut bytes = ShpFileBuilder::new(1).point(1.0, 1.0).build();
    bytes[3] = 0; // file code 9994 -> 9984
    bytes.extend_from_slice(&[0u8; 2]);
    let mut reader = ShpReader::from_bytes(bytes)
        .unwrap()
        .with_configuration(failsafe());
    assert_eq!(
        reader.notifications().of_type(NotificationType::Warning).len(),
        2
    );
    // Two stray bytes cannot hold a record header.
    assert!(reader.next_record().unwrap().is_some());
    assert!(reader.next_record().unwrap().is_none());
}

#[test]
fn test_iterator() {
    let bytes = ShpFileBuilder::new(8)
        .multi_point(&[(1.0, 2.0), (3.0, 4.0)])
        .multi_point(&[(5.0, 6.0)])
        .build();
    let reader = ShpReader::from_bytes(bytes).unwrap();
    let wkt: Vec<String> = reader.map(|r| r.unwrap().wkt.unwrap()).collect();
    assert_eq!(
        wkt,
        vec![
            "MULTIPOINT ((1.000000 2.000000), (3.000000 4.000000))",
            "MULTIPOINT ((5.000000 6.000000))",
        ]
    );
}

#[test]
fn test_parallel_matches_sequential() {
    let bytes = ShpFileBuilder::new(5)
        .polygon(&[vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)]])
        .null()
        .record(15, &[0u8; 40])
        .polygon(&[
            vec![(0.0, 0.0), (0.0, 1.0), (0.0, 0.0)],
            vec![(2.0, 2.0), (2.0, 3.0), (2.0, 2.0)],
        ])
        .build();

    let seq = ShpReader::from_bytes(bytes.clone()).unwrap().read().unwrap();
    let par = ShpReader::from_bytes(bytes).unwrap().read_parallel().unwrap();
    assert_eq!(seq.records, par.records);
    assert_eq!(seq.notifications.len(), par.notifications.len());
}

#[test]
fn test_parallel_reports_body_error_before_truncated_tail() {
    let bad = raw_multi_part_body(&[0, 3, 1], 4, &[(0.0, 0.0); 4]);
    let mut bytes = ShpFileBuilder::new(3)
        .record(3, &bad)
        .point(5.0, 6.0)
        .point(7.0, 8.0)
        .build();
    bytes.truncate(bytes.len() - 4);

    let seq = ShpReader::from_bytes(bytes.clone()).unwrap().read().unwrap_err();
    let par = ShpReader::from_bytes(bytes.clone())
        .unwrap()
        .read_parallel()
        .unwrap_err();
    assert!(matches!(seq, ShpError::MalformedGeometry(_)));
    assert!(matches!(par, ShpError::MalformedGeometry(_)));
    assert_eq!(seq.to_string(), par.to_string());

    // With every body intact the truncation is what both report.
    let mut tail_only = ShpFileBuilder::new(1).point(1.0, 2.0).point(3.0, 4.0).build();
    tail_only.truncate(tail_only.len() - 4);
    let seq = ShpReader::from_bytes(tail_only.clone()).unwrap().read().unwrap_err();
    let par = ShpReader::from_bytes(tail_only).unwrap().read_parallel().unwrap_err();
    assert!(seq.is_truncation());
    assert_eq!(seq.to_string(), par.to_string());

    // Failsafe keeps the good records on both paths.
    let seq = ShpReader::from_bytes(bytes.clone())
        .unwrap()
        .with_configuration(failsafe())
        .read()
        .unwrap();
    let par = ShpReader::from_bytes(bytes)
        .unwrap()
        .with_configuration(failsafe())
        .read_parallel()
        .unwrap();
    assert_eq!(seq.records, par.records);
    assert_eq!(seq.len(), 1);
    assert_eq!(
        seq.notifications().of_type(NotificationType::Error).len(),
        par.notifications().of_type(NotificationType::Error).len()
    );
}

#[test]
fn test_header_only_file() {
    let ds = ShpReader::from_bytes(ShpFileBuilder::new(0).build())
        .unwrap()
        .read()
        .unwrap();
    assert!(ds.is_empty());
    assert!(ds.notifications().is_empty());
}
