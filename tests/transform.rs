// tests/transform.rs
//
// Whole-record transformation and verdicts.
//
use seed_convert::core::NullDiagnostics;
use seed_convert::{HeritrixSeed, Transformer, Verdict};

#[test]
fn valid_seed_serializes_in_import_shape() {
    let seed: HeritrixSeed = serde_json::from_str(
        r#"{"url":"http://www.kommune-x.no","description":"Kommunens side","p2":1,"deact":0}"#,
    )
    .unwrap();
    let record = Transformer::new(&[], "heritrix").transform(&seed, &mut NullDiagnostics);

    assert_eq!(record.verdict(), Verdict::Accepted);
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        concat!(
            r#"{"entityName":"Kommune-x","uri":"http://www.kommune-x.no/","#,
            r#""entityDescription":"Kommunens side","#,
            r#""entityLabel":[{"key":"source","value":"heritrix"},{"key":"næring","value":"kommune"}],"#,
            r#""seedLabel":[{"key":"source","value":"heritrix"},{"key":"heritrix_profile","value":"p2"}],"#,
            r#""seedDescription":""}"#
        )
    );
}

#[test]
fn failed_fields_are_omitted_and_record_rejected() {
    let mut diag: Vec<String> = Vec::new();
    let seed = HeritrixSeed::with_url("not a url!!");
    let record = Transformer::new(&[], "heritrix").transform(&seed, &mut diag);

    assert_eq!(record.verdict(), Verdict::Rejected { missing_name: true, missing_uri: true });
    assert_eq!(diag.len(), 2);

    let json = serde_json::to_string(&record).unwrap();
    assert!(!json.contains("entityName"));
    assert!(!json.contains("\"uri\""));
    assert!(!json.contains("entityDescription"));
    assert!(json.contains(r#""seedDescription":"""#));
}

#[test]
fn source_tag_is_configurable() {
    let record = Transformer::new(&[], "legacy")
        .transform(&HeritrixSeed::with_url("www.nb.no"), &mut NullDiagnostics);
    assert_eq!(record.entity_label[0].value, "legacy");
    assert_eq!(record.seed_label[0].value, "legacy");
    assert_eq!(record.entity_label.iter().filter(|l| l.key == "source").count(), 1);
}

#[test]
fn transforming_twice_is_byte_identical() {
    let seed: HeritrixSeed = serde_json::from_str(
        r#"{"url":"ndla.blogg.no","description":null,"p1":1,"p99":1}"#,
    )
    .unwrap();
    let t = Transformer::new(&[], "heritrix");

    let a = serde_json::to_vec(&t.transform(&seed, &mut NullDiagnostics)).unwrap();
    let b = serde_json::to_vec(&t.transform(&seed, &mut NullDiagnostics)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn null_description_is_copied_through() {
    let seed: HeritrixSeed =
        serde_json::from_str(r#"{"url":"www.nb.no","description":null}"#).unwrap();
    let record = Transformer::new(&[], "heritrix").transform(&seed, &mut NullDiagnostics);

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains(r#""uri":"http://www.nb.no/","entityDescription":null,"entityLabel""#));

    let seed = HeritrixSeed::with_url("www.nb.no");
    let json = serde_json::to_string(&Transformer::new(&[], "heritrix").transform(&seed, &mut NullDiagnostics)).unwrap();
    assert!(!json.contains("entityDescription"));
}
