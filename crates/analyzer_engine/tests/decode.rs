use analyzer_engine::{decode_analysis, error_detail, DecodeError};

#[test]
fn decodes_payload_and_ignores_extra_fields() {
    let payload = decode_analysis(
        br#"{"summary":"S","key_points":["a"],"sentiment":"Negative","topics":[],"model":"x"}"#,
    )
    .expect("valid payload");

    assert_eq!(payload.summary, "S");
    assert_eq!(payload.key_points, vec!["a".to_string()]);
    assert_eq!(payload.sentiment, "Negative");
    assert!(payload.topics.is_empty());
}

#[test]
fn missing_or_mistyped_fields_are_schema_errors() {
    let cases: [&[u8]; 5] = [
        br#"{"key_points":[],"sentiment":"n","topics":[]}"#,
        br#"{"summary":"S","key_points":"a","sentiment":"n","topics":[]}"#,
        br#"{"summary":null,"key_points":[],"sentiment":"n","topics":[]}"#,
        br#"[]"#,
        b"<html>oops</html>",
    ];
    for body in cases {
        let err = decode_analysis(body).unwrap_err();
        assert!(matches!(err, DecodeError::Schema { .. }));
    }
}

#[test]
fn error_detail_reads_service_errors() {
    assert_eq!(
        error_detail(br#"{"detail":"Unsupported file format"}"#),
        Some("Unsupported file format".to_string())
    );
    assert_eq!(
        error_detail(br#"{"detail":[{"loc":["body","file"]}]}"#),
        Some(r#"[{"loc":["body","file"]}]"#.to_string())
    );
    assert_eq!(error_detail(br#"{"message":"nope"}"#), None);
    assert_eq!(error_detail(b"Internal Server Error"), None);
}
