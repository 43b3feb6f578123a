//! Proptest strategies for pricing tests.
//!
//! Values are drawn a little past each stat's bounds so clamping gets
//! exercised alongside the in-range cases. HP has no upper bound, so its
//! values also reach up to `i32::MAX`.

use proptest::prelude::*;

use fighter_core::psychic::PsychicMode;

/// Generate any psychic mode.
pub fn arb_psychic_mode() -> impl Strategy<Value = PsychicMode> {
    prop_oneof![
        Just(PsychicMode::None),
        Just(PsychicMode::Psyker),
        Just(PsychicMode::MasterPsyker),
    ]
}

/// Generate a requested value for one of the standard stats.
///
/// Yields `(name, value)` with the value in `min - 3 ..= max + 3`
/// (HP runs from 0 up to `i32::MAX`).
pub fn arb_stat_request() -> impl Strategy<Value = (&'static str, i32)> {
    prop_oneof![
        (2i32..=11).prop_map(|v| ("Move", v)),
        (2i32..=14).prop_map(|v| ("DEF", v)),
        (-1i32..=7).prop_map(|v| ("AP", v)),
        (0i32..=30).prop_map(|v| ("HP", v)),
        arb_large_hp().prop_map(|v| ("HP", v)),
        (0i32..=8).prop_map(|v| ("ATK", v)),
        (2i32..=14).prop_map(|v| ("Fight", v)),
        (2i32..=14).prop_map(|v| ("Shoot", v)),
    ]
}

/// Generate a sequence of stat requests.
pub fn arb_stat_requests(max_len: usize) -> impl Strategy<Value = Vec<(&'static str, i32)>> {
    proptest::collection::vec(arb_stat_request(), 0..max_len)
}

/// Generate an HP value large enough to push totals toward `i32::MAX`.
pub fn arb_large_hp() -> impl Strategy<Value = i32> {
    prop_oneof![
        1_000_000i32..=i32::MAX,
        (i32::MAX - 64)..=i32::MAX,
    ]
}

/// Generate an HP value within the HP stat's bounds, which have no maximum.
pub fn arb_hp() -> impl Strategy<Value = i32> {
    prop_oneof![3i32..=40, 41i32..=i32::MAX, arb_large_hp()]
}

/// Generate a Base+Stats value, including the negative floor.
pub fn arb_base_and_stats() -> impl Strategy<Value = i32> {
    -2i32..=120
}

/// Generate a whole percentage.
pub fn arb_percent() -> impl Strategy<Value = u32> {
    0u32..=100
}
