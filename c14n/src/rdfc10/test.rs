use super::*;
use crate::options::{DEFAULT_DEPTH_FACTOR, DEFAULT_PERMUTATION_LIMIT};
use ldcanon_api::ns::xsd;
use ldcanon_api::Quad;

#[test]
fn example2() {
    crate::test_setup();

    let dataset = ez_quads(&[
        "<http://example.com/#p> <http://example.com/#q> _:e0 .",
        "<http://example.com/#p> <http://example.com/#r> _:e1 .",
        "_:e0 <http://example.com/#s> <http://example.com/#u> .",
        "_:e1 <http://example.com/#t> <http://example.com/#u> .",
    ]);
    let exp = r"<http://example.com/#p> <http://example.com/#q> _:c14n0 .
<http://example.com/#p> <http://example.com/#r> _:c14n1 .
_:c14n0 <http://example.com/#s> <http://example.com/#u> .
_:c14n1 <http://example.com/#t> <http://example.com/#u> .
";
    let got = canonicalize(&dataset).unwrap();
    println!(">>>> GOT\n{got}>>>> EXPECTED\n{exp}<<<<");
    assert!(got == exp);
}

#[test]
fn example2_map() {
    crate::test_setup();

    let dataset = ez_quads(&[
        "<http://example.com/#p> <http://example.com/#q> _:e0 .",
        "<http://example.com/#p> <http://example.com/#r> _:e1 .",
        "_:e0 <http://example.com/#s> <http://example.com/#u> .",
        "_:e1 <http://example.com/#t> <http://example.com/#u> .",
    ]);
    let (relabelled, map) = relabel(&dataset).unwrap();
    assert_eq!(relabelled.len(), 4);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("e0").map(String::as_str), Some("c14n0"));
    assert_eq!(map.get("e1").map(String::as_str), Some("c14n1"));
}

#[test]
fn example3() {
    crate::test_setup();

    let dataset = ez_quads(&[
        "<http://example.com/#p> <http://example.com/#q> _:e0 .",
        "<http://example.com/#p> <http://example.com/#q> _:e1 .",
        "_:e0 <http://example.com/#p> _:e2 .",
        "_:e1 <http://example.com/#p> _:e3 .",
        "_:e2 <http://example.com/#r> _:e3 .",
    ]);
    let exp = r"<http://example.com/#p> <http://example.com/#q> _:c14n2 .
<http://example.com/#p> <http://example.com/#q> _:c14n3 .
_:c14n0 <http://example.com/#r> _:c14n1 .
_:c14n2 <http://example.com/#p> _:c14n1 .
_:c14n3 <http://example.com/#p> _:c14n0 .
";
    let got = canonicalize(&dataset).unwrap();
    println!(">>>> GOT\n{got}>>>> EXPECTED\n{exp}<<<<");
    assert!(got == exp);
}

#[test]
fn cycle5() {
    crate::test_setup();

    let dataset = ez_quads(&[
        "_:e0 <http://example.com/#p> _:e1 .",
        "_:e1 <http://example.com/#p> _:e2 .",
        "_:e2 <http://example.com/#p> _:e3 .",
        "_:e3 <http://example.com/#p> _:e4 .",
        "_:e4 <http://example.com/#p> _:e0 .",
    ]);
    let exp = r"_:c14n0 <http://example.com/#p> _:c14n4 .
_:c14n1 <http://example.com/#p> _:c14n0 .
_:c14n2 <http://example.com/#p> _:c14n1 .
_:c14n3 <http://example.com/#p> _:c14n2 .
_:c14n4 <http://example.com/#p> _:c14n3 .
";
    let got = canonicalize(&dataset).unwrap();
    println!(">>>> GOT\n{got}>>>> EXPECTED\n{exp}<<<<");
    assert!(got == exp);
}

#[test]
fn cycle5_toxic() {
    crate::test_setup();

    let dataset = ez_quads(&[
        "_:e0 <http://example.com/#p> _:e1 .",
        "_:e1 <http://example.com/#p> _:e2 .",
        "_:e2 <http://example.com/#p> _:e3 .",
        "_:e3 <http://example.com/#p> _:e4 .",
        "_:e4 <http://example.com/#p> _:e0 .",
    ]);
    let mut output = Vec::<u8>::new();
    // set depth_factor too low for this graph
    let options = C14nOptions::new()
        .with_depth_factor(0.5)
        .with_permutation_limit(2 * DEFAULT_PERMUTATION_LIMIT);
    let res = normalize_with::<Sha256, _>(&dataset, &mut output, &options);
    assert!(matches!(res, Err(C14nError::ToxicGraph(_))));
    assert!(output.is_empty());
}

#[test]
fn clique5() {
    crate::test_setup();

    let dataset = ez_quads(&clique5_lines());
    let exp = r"_:c14n0 <http://example.com/#p> _:c14n1 .
_:c14n0 <http://example.com/#p> _:c14n2 .
_:c14n0 <http://example.com/#p> _:c14n3 .
_:c14n0 <http://example.com/#p> _:c14n4 .
_:c14n1 <http://example.com/#p> _:c14n0 .
_:c14n1 <http://example.com/#p> _:c14n2 .
_:c14n1 <http://example.com/#p> _:c14n3 .
_:c14n1 <http://example.com/#p> _:c14n4 .
_:c14n2 <http://example.com/#p> _:c14n0 .
_:c14n2 <http://example.com/#p> _:c14n1 .
_:c14n2 <http://example.com/#p> _:c14n3 .
_:c14n2 <http://example.com/#p> _:c14n4 .
_:c14n3 <http://example.com/#p> _:c14n0 .
_:c14n3 <http://example.com/#p> _:c14n1 .
_:c14n3 <http://example.com/#p> _:c14n2 .
_:c14n3 <http://example.com/#p> _:c14n4 .
_:c14n4 <http://example.com/#p> _:c14n0 .
_:c14n4 <http://example.com/#p> _:c14n1 .
_:c14n4 <http://example.com/#p> _:c14n2 .
_:c14n4 <http://example.com/#p> _:c14n3 .
";
    let got = canonicalize(&dataset).unwrap();
    println!(">>>> GOT\n{got}>>>> EXPECTED\n{exp}<<<<");
    assert!(got == exp);
}

#[test]
fn clique5_toxic() {
    crate::test_setup();

    let dataset = ez_quads(&clique5_lines());
    let mut output = Vec::<u8>::new();
    // set permutation limit too low for this graph
    let options = C14nOptions::new()
        .with_depth_factor(2.0 * DEFAULT_DEPTH_FACTOR)
        .with_permutation_limit(3);
    let res = normalize_with::<Sha256, _>(&dataset, &mut output, &options);
    assert!(matches!(res, Err(C14nError::ToxicGraph(_))));
}

#[test]
fn clique5_unbounded() {
    crate::test_setup();

    let dataset = ez_quads(&clique5_lines());
    let bounded = canonicalize(&dataset).unwrap();
    let unbounded = canonicalize_with::<Sha256>(&dataset, &C14nOptions::unbounded()).unwrap();
    assert_eq!(bounded, unbounded);
}

#[test]
fn cycle2plus3() {
    crate::test_setup();

    let dataset = ez_quads(&[
        "_:e0 <http://example.com/#p> _:e1 .",
        "_:e1 <http://example.com/#p> _:e0 .",
        "_:e2 <http://example.com/#p> _:e3 .",
        "_:e3 <http://example.com/#p> _:e4 .",
        "_:e4 <http://example.com/#p> _:e2 .",
    ]);
    let exp = r"_:c14n0 <http://example.com/#p> _:c14n1 .
_:c14n1 <http://example.com/#p> _:c14n0 .
_:c14n2 <http://example.com/#p> _:c14n4 .
_:c14n3 <http://example.com/#p> _:c14n2 .
_:c14n4 <http://example.com/#p> _:c14n3 .
";
    let got = canonicalize(&dataset).unwrap();
    println!(">>>> GOT\n{got}>>>> EXPECTED\n{exp}<<<<");
    assert!(got == exp);
}

#[test]
fn tricky_order() {
    crate::test_setup();

    let dataset = ez_quads(&[
        "<tag:a> <tag:p> _:a .",
        "<tag:a> <tag:p> <tag:a> .",
        "<tag:a> <tag:p> \"a\" .",
        "<tag:a> <tag:p> \"a!\" .",
        "<tag:a9> <tag:p> \"a!\" .",
    ]);
    let exp = r#"<tag:a9> <tag:p> "a!" .
<tag:a> <tag:p> "a!" .
<tag:a> <tag:p> "a" .
<tag:a> <tag:p> <tag:a> .
<tag:a> <tag:p> _:c14n0 .
"#;
    let got = canonicalize(&dataset).unwrap();
    println!(">>>> GOT\n{got}>>>> EXPECTED\n{exp}<<<<");
    assert!(got == exp);
}

#[test]
fn example2_sha384() {
    crate::test_setup();

    let dataset = ez_quads(&[
        "<http://example.com/#p> <http://example.com/#q> _:e0 .",
        "<http://example.com/#p> <http://example.com/#r> _:e1 .",
        "_:e0 <http://example.com/#s> <http://example.com/#u> .",
        "_:e1 <http://example.com/#t> <http://example.com/#u> .",
    ]);
    let exp = r"<http://example.com/#p> <http://example.com/#q> _:c14n1 .
<http://example.com/#p> <http://example.com/#r> _:c14n0 .
_:c14n0 <http://example.com/#t> <http://example.com/#u> .
_:c14n1 <http://example.com/#s> <http://example.com/#u> .
";
    let mut got = Vec::<u8>::new();
    normalize_sha384(&dataset, &mut got).unwrap();
    let got = String::from_utf8(got).unwrap();
    println!(">>>> GOT\n{got}>>>> EXPECTED\n{exp}<<<<");
    assert!(got == exp);
    let (_, map) = relabel_sha384(&dataset).unwrap();
    assert_eq!(map.get("e1").map(String::as_str), Some("c14n0"));
}

#[test]
fn no_blank_nodes() {
    crate::test_setup();

    let dataset = ez_quads(&[
        "<tag:s> <tag:p> \"v\" <tag:g> .",
        "<tag:s> <tag:p> \"v\" .",
    ]);
    let exp = "<tag:s> <tag:p> \"v\" .\n<tag:s> <tag:p> \"v\" <tag:g> .\n";
    assert_eq!(canonicalize(&dataset).unwrap(), exp);
    let (_, map) = relabel(&dataset).unwrap();
    assert!(map.is_empty());
}

#[test]
fn empty_dataset() {
    assert_eq!(canonicalize(&Dataset::new()).unwrap(), "");
}

#[test]
fn single_blank_node_label_is_irrelevant() {
    crate::test_setup();

    let exp = "_:c14n0 <tag:p> \"v\" .\n";
    assert_eq!(canonicalize(&ez_quads(&["_:x <tag:p> \"v\" ."])).unwrap(), exp);
    assert_eq!(canonicalize(&ez_quads(&["_:y <tag:p> \"v\" ."])).unwrap(), exp);
}

#[test]
fn symmetric_pair() {
    crate::test_setup();

    let exp = "_:c14n0 <tag:p> _:c14n1 .\n_:c14n1 <tag:p> _:c14n0 .\n";
    let d1 = ez_quads(&["_:a <tag:p> _:b .", "_:b <tag:p> _:a ."]);
    let d2 = ez_quads(&["_:y <tag:p> _:x .", "_:x <tag:p> _:y ."]);
    assert_eq!(canonicalize(&d1).unwrap(), exp);
    assert_eq!(canonicalize(&d2).unwrap(), exp);
}

#[test]
fn blank_graph_name() {
    crate::test_setup();

    let d1 = ez_quads(&["<tag:s> <tag:p> _:o _:g .", "_:g <tag:p> <tag:o> ."]);
    let d2 = ez_quads(&["_:x <tag:p> <tag:o> .", "<tag:s> <tag:p> _:y _:x ."]);
    let got = canonicalize(&d1).unwrap();
    assert_eq!(got, canonicalize(&d2).unwrap());
    assert_eq!(got.matches("_:c14n").count(), 3);
}

#[test]
fn self_loop_is_hashed_once() {
    crate::test_setup();

    let got = canonicalize(&ez_quads(&["_:x <tag:p> _:x ."])).unwrap();
    assert_eq!(got, "_:c14n0 <tag:p> _:c14n0 .\n");
}

#[test]
fn insertion_order_is_irrelevant() {
    crate::test_setup();

    let lines = [
        "<http://example.com/#p> <http://example.com/#q> _:e0 .",
        "<http://example.com/#p> <http://example.com/#q> _:e1 .",
        "_:e0 <http://example.com/#p> _:e2 .",
        "_:e1 <http://example.com/#p> _:e3 .",
        "_:e2 <http://example.com/#r> _:e3 .",
    ];
    let mut reversed = lines;
    reversed.reverse();
    assert_eq!(
        canonicalize(&ez_quads(&lines)).unwrap(),
        canonicalize(&ez_quads(&reversed)).unwrap(),
    );
}

#[test]
fn idempotent() {
    crate::test_setup();

    let d = ez_quads(&clique5_lines());
    let once = canonicalize(&d).unwrap();
    let twice = canonicalize(&ldcanon_nquads::parse_str(&once).unwrap()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn identical_lines_are_collapsed() {
    crate::test_setup();

    let mut d = Dataset::new();
    let s = Node::blank("x");
    let p = Node::iri("tag:p");
    d.insert(None, Triple::new(s.clone(), p.clone(), Node::literal("a")));
    d.insert(
        None,
        Triple::new(s, p, Node::typed_literal("a", xsd::string)),
    );
    assert_eq!(d.len(), 2);
    assert_eq!(canonicalize(&d).unwrap(), "_:c14n0 <tag:p> \"a\" .\n");
}

#[test]
fn collapsed_lines_are_hashed_once() {
    crate::test_setup();

    for i in 0..40 {
        let plain = format!("_:a <tag:p> \"v{i}\" .");
        let typed = format!("_:a <tag:p> \"v{i}\"^^<{}> .", xsd::string);
        let d = ez_quads(&[
            plain.as_str(),
            typed.as_str(),
            "_:a <tag:q> _:b .",
            "_:b <tag:r> \"w\" .",
        ]);
        assert_eq!(d.len(), 4);
        let once = canonicalize(&d).unwrap();
        assert_eq!(once.lines().count(), 3, "{once}");
        let twice = canonicalize(&ldcanon_nquads::parse_str(&once).unwrap()).unwrap();
        assert_eq!(once, twice, "v{i}");
    }
}

#[test]
fn literal_predicate() {
    let d: Dataset = [Quad::from_terms(
        Node::blank("x"),
        Node::literal("p"),
        Node::iri("tag:o"),
        None,
    )]
    .into_iter()
    .collect();
    assert!(matches!(relabel(&d), Err(C14nError::LiteralPredicate(_))));
}

#[test]
fn blank_predicate() {
    crate::test_setup();

    let gen = |s: &str, p: &str, o: &str| -> Dataset {
        [
            Quad::from_terms(Node::blank(s), Node::blank(p), Node::blank(o), None),
            Quad::from_terms(Node::blank(o), Node::iri("tag:p"), Node::blank(p), None),
        ]
        .into_iter()
        .collect()
    };
    let d1 = gen("a", "b", "c");
    let d2 = gen("z", "x", "y");
    let got = canonicalize(&d1).unwrap();
    assert_eq!(got, canonicalize(&d2).unwrap());
    assert_eq!(got.lines().count(), 2);

    let strict = C14nOptions::new().with_strict(true);
    assert!(matches!(
        relabel_with::<Sha256>(&d1, &strict),
        Err(C14nError::Unsupported(_))
    ));
}

#[test]
fn issued_labels_are_contiguous() {
    crate::test_setup();

    let d = ez_quads(&[
        "_:a <tag:p> _:b .",
        "_:b <tag:p> _:c <tag:g> .",
        "_:c <tag:q> \"x\" _:d .",
    ]);
    let (_, map) = relabel(&d).unwrap();
    let mut labels: Vec<_> = map.values().cloned().collect();
    labels.sort();
    assert_eq!(labels, ["c14n0", "c14n1", "c14n2", "c14n3"]);
}

fn clique5_lines() -> Vec<&'static str> {
    vec![
        "_:e0 <http://example.com/#p> _:e1 .",
        "_:e0 <http://example.com/#p> _:e2 .",
        "_:e0 <http://example.com/#p> _:e3 .",
        "_:e0 <http://example.com/#p> _:e4 .",
        "_:e1 <http://example.com/#p> _:e0 .",
        "_:e1 <http://example.com/#p> _:e2 .",
        "_:e1 <http://example.com/#p> _:e3 .",
        "_:e1 <http://example.com/#p> _:e4 .",
        "_:e2 <http://example.com/#p> _:e0 .",
        "_:e2 <http://example.com/#p> _:e1 .",
        "_:e2 <http://example.com/#p> _:e3 .",
        "_:e2 <http://example.com/#p> _:e4 .",
        "_:e3 <http://example.com/#p> _:e0 .",
        "_:e3 <http://example.com/#p> _:e1 .",
        "_:e3 <http://example.com/#p> _:e2 .",
        "_:e3 <http://example.com/#p> _:e4 .",
        "_:e4 <http://example.com/#p> _:e0 .",
        "_:e4 <http://example.com/#p> _:e1 .",
        "_:e4 <http://example.com/#p> _:e2 .",
        "_:e4 <http://example.com/#p> _:e3 .",
    ]
}

/// Parse N-Quads lines, useful for writing test cases.
fn ez_quads(lines: &[&str]) -> Dataset {
    ldcanon_nquads::parse_str(&lines.join("\n")).unwrap()
}
