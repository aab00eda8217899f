use criterion::{criterion_group, criterion_main, Criterion};

use gbce::exchange::gbce_v1::{Stock, Trade, TradeType};

fn recalculation_core_loop_test() {
    let now = 1_000_000;
    let mut stock = Stock::new("ABC", 50.0, false, 75, 10, None);

    for offset in 0..1_000 {
        stock.record_trade(Trade::new("ABC", now - offset, 10, TradeType::Buy, 25.0));
    }

    stock.recalculate_price(now);
}

fn benchmarks(c: &mut Criterion) {
    c.bench_function("recalculation core loop", |b| {
        b.iter(recalculation_core_loop_test)
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
