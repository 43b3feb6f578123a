//! Pricing benchmarks for fighter_core.
//!
//! Run with: `cargo bench -p fighter_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fighter_core::builder::FighterBuilder;
use fighter_core::psychic::PsychicMode;
use fighter_test_utils::fixtures::{
    test_catalog, BLADE, BLINK_PACK, HORDE, JUMP_PACK, KIT, PLASMA, RESILIENT, TOUGH,
};

/// Full reprice of a loaded build, the cost paid on every edit.
pub fn pricing_benchmark(c: &mut Criterion) {
    let catalog = test_catalog();
    let mut builder = FighterBuilder::new(&catalog);
    builder.set_psychic_mode(PsychicMode::MasterPsyker);
    for id in [BLADE, PLASMA] {
        let _ = builder.toggle_weapon(id);
    }
    for id in [KIT, BLINK_PACK, JUMP_PACK] {
        let _ = builder.toggle_equipment(id);
    }
    for id in [TOUGH, HORDE, RESILIENT] {
        let _ = builder.toggle_fighter_ability(id);
    }

    c.bench_function("summary_full_build", |b| {
        b.iter(|| black_box(builder.summary()));
    });

    c.bench_function("set_stat_then_summary", |b| {
        let mut hp = 3;
        b.iter(|| {
            hp = if hp >= 20 { 3 } else { hp + 1 };
            let _ = builder.set_stat("HP", black_box(hp));
            black_box(builder.summary())
        });
    });
}

criterion_group!(benches, pricing_benchmark);
criterion_main!(benches);
