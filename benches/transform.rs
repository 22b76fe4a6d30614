// benches/transform.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use seed_convert::core::NullDiagnostics;
use seed_convert::{HeritrixSeed, School, Transformer};

fn sample_seeds() -> Vec<HeritrixSeed> {
    let urls = [
        "http://www.kommune-x.no",
        "ndla.blogg.no/sok",
        "https://www.hf.uio.no/om",
        "www.bygdeposten.no",
        "not a url!!",
        "http://www.x",
        "mailto:post@nb.no",
    ];
    urls.iter()
        .enumerate()
        .map(|(i, url)| HeritrixSeed {
            description: Some(format!("seed {i} museum teater").into()),
            p1: i % 2 == 0,
            p99: i % 3 == 0,
            ..HeritrixSeed::with_url(url)
        })
        .collect()
}

fn sample_schools() -> Vec<School> {
    (0..200)
        .map(|i| School { url: format!("skole{i}.no"), institution: format!("Skole {i}") })
        .chain(std::iter::once(School { url: "uio.no".into(), institution: "UiO".into() }))
        .collect()
}

fn bench_transform(c: &mut Criterion) {
    let seeds = sample_seeds();
    let schools = sample_schools();
    let transformer = Transformer::new(&schools, "heritrix");

    c.bench_function("transform_mixed", |b| {
        b.iter(|| {
            for seed in &seeds {
                black_box(transformer.transform(black_box(seed), &mut NullDiagnostics));
            }
        })
    });

    let batch = serde_json::to_vec(&vec![serde_json::json!({"url": "www.nb.no", "p1": 1}); 1_000]).unwrap();
    c.bench_function("stream_1000_seeds", |b| {
        b.iter(|| {
            let mut n = 0;
            seed_convert::source::for_each_seed(black_box(&batch[..]), "bench", |s| {
                n += usize::from(s.is_some());
                Ok(())
            })
            .unwrap();
            black_box(n)
        })
    });
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
