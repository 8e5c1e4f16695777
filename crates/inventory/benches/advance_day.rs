use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use gildedrose_inventory::{GildedRose, Item};

/// Mixed inventory cycling through every category.
fn inventory(size: usize) -> Vec<Item> {
    let templates = [
        ("+5 Dexterity Vest", 10, 20),
        ("Aged Brie", 2, 0),
        ("Elixir of the Mongoose", 5, 7),
        ("Sulfuras, Hand of Ragnaros", 0, 80),
        ("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        ("Conjured Mana Cake", 3, 6),
    ];
    templates
        .iter()
        .cycle()
        .take(size)
        .map(|(name, sell_in, quality)| Item::new(*name, *sell_in, *quality))
        .collect()
}

fn bench_advance_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_day");

    for size in [100usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rose = GildedRose::new(inventory(size));
            b.iter(|| {
                rose.advance_day();
                black_box(rose.items());
            });
        });
    }

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let items = inventory(10_000);
    c.bench_function("resolve_categories_10000", |b| {
        b.iter(|| black_box(GildedRose::new(items.clone())));
    });
}

criterion_group!(benches, bench_advance_day, bench_construction);
criterion_main!(benches);
