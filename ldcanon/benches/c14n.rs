use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use ldcanon::api::{Dataset, Node, Quad};
use ldcanon::c14n::canonicalize;
use ldcanon::nquads::parse_str;

fn parse_nq(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse NQ");
    group.throughput(Throughput::Bytes(NQ.len() as u64));
    group.bench_with_input("parse NQ", &NQ, |b, &data| {
        b.iter(|| parse_str(data).map(|d| d.len()))
    });
    group.finish();
}

fn c14n_people(c: &mut Criterion) {
    let dataset = parse_str(NQ).expect("benchmark data is valid N-Quads");
    let mut group = c.benchmark_group("c14n people");
    group.throughput(Throughput::Elements(dataset.len() as u64));
    group.bench_with_input("c14n people", &dataset, |b, d| b.iter(|| canonicalize(d)));
    group.finish();
}

fn c14n_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("c14n cycle");
    for size in [8, 32, 128] {
        let dataset = cycle(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(format!("cycle {size}"), &dataset, |b, d| {
            b.iter(|| canonicalize(d))
        });
    }
    group.finish();
}

criterion_group!(benches, parse_nq, c14n_people, c14n_cycle);
criterion_main!(benches);

/// A ring of `size` undistinguishable blank nodes, the worst case for first-degree hashing.
fn cycle(size: usize) -> Dataset {
    let p = Node::iri("http://example.org/p");
    (0..size)
        .map(|i| {
            Quad::from_terms(
                Node::blank(format!("n{i}")),
                p.clone(),
                Node::blank(format!("n{}", (i + 1) % size)),
                None,
            )
        })
        .collect()
}

const NQ: &str = r#"
<http://example.org/bart> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.org/Boy> .
<http://example.org/bart> <http://example.org/father> <http://example.org/homer> .
<http://example.org/bart> <http://example.org/mother> <http://example.org/marge> .
<http://example.org/bart> <http://example.org/age> "10"^^<http://www.w3.org/2001/XMLSchema#integer> .
<http://example.org/bart> <http://schema.org/name> "Bart Simpson" .
<http://example.org/bart> <http://example.org/address> _:addr .
<http://example.org/lisa> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.org/Girl> .
<http://example.org/lisa> <http://example.org/father> <http://example.org/homer> .
<http://example.org/lisa> <http://example.org/mother> <http://example.org/marge> .
<http://example.org/lisa> <http://example.org/age> "8"^^<http://www.w3.org/2001/XMLSchema#integer> .
<http://example.org/lisa> <http://schema.org/name> "Lisa Simpson" .
<http://example.org/lisa> <http://example.org/address> _:addr .
<http://example.org/homer> <http://schema.org/name> "Homer Simpson" <http://example.org/family> .
<http://example.org/marge> <http://schema.org/name> "Marge Simpson" <http://example.org/family> .
<http://example.org/homer> <http://example.org/spouse> <http://example.org/marge> <http://example.org/family> .
_:addr <http://schema.org/streetAddress> "742 Evergreen Terrace" .
_:addr <http://schema.org/addressLocality> "Springfield" .
_:pet1 <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.org/Dog> _:pets .
_:pet1 <http://schema.org/name> "Santa's Little Helper" _:pets .
_:pet1 <http://example.org/owner> _:owner1 _:pets .
_:owner1 <http://schema.org/knows> _:owner2 _:pets .
_:owner2 <http://schema.org/knows> _:owner1 _:pets .
_:pet2 <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.org/Cat> _:pets .
_:pet2 <http://schema.org/name> "Snowball II" _:pets .
_:pet2 <http://example.org/owner> _:owner2 _:pets .
"#;
