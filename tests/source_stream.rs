// tests/source_stream.rs
//
// Streaming the top-level seed array.
//
use seed_convert::source::for_each_seed;
use seed_convert::ConvertError;

#[test]
fn elements_arrive_in_order_and_non_objects_are_none() {
    let input = br#"[ {"url":"a.no"}, 42, {"description":"x"}, "b.no", {"url":"c.no","p1":1} ]"#;
    let mut seen = Vec::new();
    let n = for_each_seed(&input[..], "mem", |seed| {
        seen.push(seed.map(|s| s.url));
        Ok(())
    })
    .unwrap();

    assert_eq!(n, 5);
    assert_eq!(
        seen,
        vec![
            Some(Some("a.no".to_string())),
            None,
            Some(None),
            None,
            Some(Some("c.no".to_string())),
        ]
    );
}

#[test]
fn positional_arrays_are_not_seeds() {
    let input = br#"[ ["http://www.museum-x.no", null, 1], {"url":"http://www.museum-x.no"} ]"#;
    let mut seen = Vec::new();
    for_each_seed(&input[..], "mem", |seed| {
        seen.push(seed.map(|s| (s.url, s.p1)));
        Ok(())
    })
    .unwrap();

    assert_eq!(seen, vec![None, Some((Some("http://www.museum-x.no".to_string()), false))]);
}

#[test]
fn empty_array_is_fine() {
    let n = for_each_seed(&b"[]"[..], "mem", |_| Ok(())).unwrap();
    assert_eq!(n, 0);
}

#[test]
fn truncated_array_is_a_json_error() {
    let input = br#"[{"url":"a.no"}, {"url":"#;
    let mut calls = 0;
    let err = for_each_seed(&input[..], "dump.json", |_| {
        calls += 1;
        Ok(())
    })
    .unwrap_err();

    assert_eq!(calls, 1);
    match err {
        ConvertError::Json { what, .. } => assert_eq!(what, "dump.json"),
        other => panic!("expected json error, got {other:?}"),
    }
}

#[test]
fn top_level_object_is_rejected() {
    let err = for_each_seed(&br#"{"url":"a.no"}"#[..], "mem", |_| Ok(())).unwrap_err();
    assert!(matches!(err, ConvertError::Json { .. }));
}

#[test]
fn trailing_garbage_is_rejected() {
    let err = for_each_seed(&b"[] []"[..], "mem", |_| Ok(())).unwrap_err();
    assert!(matches!(err, ConvertError::Json { .. }));
}
