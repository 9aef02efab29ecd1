use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use userlist_core::{AlphabetIndex, NameStore, PageRequest, SearchRequest, UserDirectory};

const NAMES: usize = 200_000;

fn random_names(n: usize) -> Vec<String> {
    let mut rng = rand::rng();
    let mut names: Vec<String> = (0..n)
        .map(|_| {
            let len = rng.random_range(4..12);
            let mut name = String::with_capacity(len);
            name.push(rng.random_range(b'A'..=b'Z') as char);
            for _ in 1..len {
                name.push(rng.random_range(b'a'..=b'z') as char);
            }
            name
        })
        .collect();
    names.sort();
    names
}

fn bench_queries(c: &mut Criterion) {
    let store = NameStore::from_names(random_names(NAMES));
    c.bench_function("build_index", |b| b.iter(|| black_box(AlphabetIndex::build(&store))));

    let dir = UserDirectory::from(store);
    let last_page = (NAMES / 50) as i64 - 1;
    c.bench_function("page_first", |b| {
        b.iter(|| black_box(dir.page(&PageRequest::new(0, 50))))
    });
    c.bench_function("page_last", |b| {
        b.iter(|| black_box(dir.page(&PageRequest::new(last_page, 50))))
    });
    c.bench_function("page_by_letter", |b| {
        b.iter(|| black_box(dir.page_by_letter('m', &PageRequest::new(3, 100))))
    });
    // linear scan over every name
    c.bench_function("search", |b| {
        b.iter(|| black_box(dir.search(&SearchRequest::new("ann", 0, 50))))
    });
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
