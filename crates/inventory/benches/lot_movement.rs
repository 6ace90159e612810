use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use lotflow_core::{LotNumber, ProductId};
use lotflow_inventory::Inventory;

/// Full lifecycle: receive N lots, stage them all, dispatch them all.
fn bench_lot_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("lot_cycle");
    for lots in [100u64, 1_000, 10_000] {
        group.throughput(Throughput::Elements(lots));
        group.bench_with_input(BenchmarkId::from_parameter(lots), &lots, |b, &lots| {
            b.iter(|| {
                let mut inventory = Inventory::new();
                let product = ProductId::new(1);
                for n in 0..lots as i64 {
                    inventory.receive_lot(product, LotNumber::new(n), 1);
                }
                while let Some(lot) = inventory.stage_for_outbound(product) {
                    black_box(lot);
                }
                while let Some(lot) = inventory.dispatch_outbound(product) {
                    black_box(lot);
                }
            });
        });
    }
    group.finish();
}

/// Report aggregation over a populated tracker (both areas occupied).
fn bench_build_report(c: &mut Criterion) {
    let mut inventory = Inventory::new();
    for p in 0..500i64 {
        for n in 0..4i64 {
            inventory.receive_lot(ProductId::new(p), LotNumber::new(p * 10 + n), (n + 1) as i32);
        }
        let _ = inventory.stage_for_outbound(ProductId::new(p));
    }

    c.bench_function("build_report_500_products", |b| {
        b.iter(|| black_box(inventory.build_report()));
    });
}

criterion_group!(benches, bench_lot_cycle, bench_build_report);
criterion_main!(benches);
