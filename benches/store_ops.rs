use std::time::Instant;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use hqdm_store::vocabulary::kinds;
use hqdm_store::{utc_point_in_time_iri, vocabulary, Entity, RelationStore};

fn make_store_with_people(count: u32) -> (RelationStore, Entity, Vec<Entity>) {
    let mut store = RelationStore::add_models([vocabulary().model()]);
    let world = store.create_entity(&Entity::new(kinds::POSSIBLE_WORLD), "bench:world");
    let person = Entity::new(kinds::PERSON);
    let from = Entity::new(utc_point_in_time_iri(0));
    let to = Entity::new(utc_point_in_time_iri(1_000));

    // One name per person so resolution walks a realistically sized graph.
    let mut people = Vec::new();
    for i in 0..count {
        let p = store.create_entity(&person, format!("bench:person{i}"));
        store.add_identification("bench:", &world, &p, &format!("Person {i}"), "EN", &from, &to);
        people.push(p);
    }
    (store, world, people)
}

fn bench_relate(c: &mut Criterion) {
    let mut group = c.benchmark_group("relate");
    group.throughput(Throughput::Elements(1));

    group.bench_function("relate_fresh_triple", |b| {
        b.iter_custom(|iters| {
            let mut store = RelationStore::new();
            let class = Entity::new("bench:class");
            let members: Vec<Entity> = (0..iters).map(|i| Entity::new(format!("bench:e{i}"))).collect();

            let start = Instant::now();
            for m in &members {
                store.add_member_of(m, &class);
            }
            start.elapsed()
        });
    });
    group.finish();
}

fn bench_is_kind_of(c: &mut Criterion) {
    c.bench_function("query/is_kind_of", |b| {
        let (store, _, people) = make_store_with_people(256);
        let person = Entity::new(kinds::PERSON);
        b.iter(|| people.iter().filter(|p| store.is_kind_of(p, &person)).count());
    });
}

fn bench_identifications(c: &mut Criterion) {
    c.bench_function("signs/identifications", |b| {
        let (store, _, people) = make_store_with_people(64);
        b.iter(|| {
            people
                .iter()
                .map(|p| store.identifications(p, "EN").len())
                .sum::<usize>()
        });
    });
}

fn bench_add_models(c: &mut Criterion) {
    c.bench_function("combine/add_models", |b| {
        let (left, _, _) = make_store_with_people(64);
        let (right, _, _) = make_store_with_people(64);
        b.iter(|| RelationStore::add_models([&left, &right]).len());
    });
}

criterion_group!(
    store_ops,
    bench_relate,
    bench_is_kind_of,
    bench_identifications,
    bench_add_models
);
criterion_main!(store_ops);
