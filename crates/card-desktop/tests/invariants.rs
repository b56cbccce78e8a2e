//! Property tests for the card store and engine.
//!
//! Random pointer and command streams are run against the public API and the
//! collection-wide guarantees are checked after every step.

use card_desktop::{
    Band, CardConfig, CardEngine, CardKind, CardStore, EngineConfig, GroupBy, Size, Vec2,
};
use proptest::prelude::*;

fn engine() -> CardEngine {
    let mut engine = CardEngine::new(EngineConfig::default());
    engine.init(1200.0, 800.0);
    engine
}

fn store() -> CardStore {
    let mut store = CardStore::new(EngineConfig::default());
    store.set_viewport(1200.0, 800.0);
    store
}

fn open(store: &mut CardStore, x: f32, y: f32, w: f32, h: f32) -> u64 {
    store.add_card(
        CardConfig::new(CardKind::Message)
            .with_position(Vec2::new(x, y))
            .with_size(Size::new(w, h)),
    )
}

#[derive(Debug, Clone)]
enum Op {
    Open { x: f32, y: f32 },
    Close(usize),
    Focus(usize),
    Minimize(usize),
    Maximize(usize),
    Restore(usize),
    DragTo(usize, f32, f32),
    ResizeTo(usize, f32, f32),
    TileAll,
    StackBy(GroupBy),
    MinimizeAll,
    RestoreAll,
    Viewport(f32, f32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let coord = -3000.0f32..3000.0;
    prop_oneof![
        3 => (coord.clone(), coord.clone()).prop_map(|(x, y)| Op::Open { x, y }),
        1 => any::<usize>().prop_map(Op::Close),
        3 => any::<usize>().prop_map(Op::Focus),
        2 => any::<usize>().prop_map(Op::Minimize),
        2 => any::<usize>().prop_map(Op::Maximize),
        2 => any::<usize>().prop_map(Op::Restore),
        3 => (any::<usize>(), coord.clone(), coord.clone()).prop_map(|(i, x, y)| Op::DragTo(i, x, y)),
        2 => (any::<usize>(), -100.0f32..4000.0, -100.0f32..4000.0).prop_map(|(i, w, h)| Op::ResizeTo(i, w, h)),
        1 => Just(Op::TileAll),
        1 => prop_oneof![
            Just(GroupBy::Priority),
            Just(GroupBy::Type),
            Just(GroupBy::Provider),
        ]
        .prop_map(Op::StackBy),
        1 => Just(Op::MinimizeAll),
        1 => Just(Op::RestoreAll),
        1 => (800.0f32..2000.0, 600.0f32..1200.0).prop_map(|(w, h)| Op::Viewport(w, h)),
    ]
}

fn pick(engine: &CardEngine, index: usize) -> Option<u64> {
    let cards = engine.cards();
    if cards.is_empty() {
        None
    } else {
        Some(cards[index % cards.len()].id)
    }
}

fn apply(engine: &mut CardEngine, op: &Op) {
    match *op {
        Op::Open { x, y } => {
            engine.open_card(CardConfig::new(CardKind::Appointment).with_position(Vec2::new(x, y)));
        }
        Op::Close(i) => {
            if let Some(id) = pick(engine, i) {
                engine.on_close(id);
            }
        }
        Op::Focus(i) => {
            if let Some(id) = pick(engine, i) {
                engine.on_focus(id);
            }
        }
        Op::Minimize(i) => {
            if let Some(id) = pick(engine, i) {
                engine.on_minimize(id);
            }
        }
        Op::Maximize(i) => {
            if let Some(id) = pick(engine, i) {
                engine.on_maximize(id);
            }
        }
        Op::Restore(i) => {
            if let Some(id) = pick(engine, i) {
                engine.on_restore(id);
            }
        }
        Op::DragTo(i, x, y) => {
            if let Some(id) = pick(engine, i) {
                engine.on_drag_to(id, Vec2::new(x, y));
            }
        }
        Op::ResizeTo(i, w, h) => {
            if let Some(id) = pick(engine, i) {
                engine.on_resize_to(id, Size::new(w, h));
            }
        }
        Op::TileAll => engine.tile_all(),
        Op::StackBy(group_by) => engine.stack_by(group_by),
        Op::MinimizeAll => engine.minimize_all(),
        Op::RestoreAll => engine.restore_all(),
        Op::Viewport(w, h) => engine.set_viewport(w, h),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_command_streams_preserve_invariants(ops in prop::collection::vec(op_strategy(), 1..80)) {
        let mut engine = engine();
        for op in &ops {
            apply(&mut engine, op);
            if let Err(violation) = engine.store.check_invariants() {
                panic!("after {op:?}: {violation}");
            }
        }
    }

    #[test]
    fn drag_sequences_stay_inside_usable_viewport(
        moves in prop::collection::vec((-5000.0f32..5000.0, -5000.0f32..5000.0), 1..40),
    ) {
        let mut engine = engine();
        engine.open_card(
            CardConfig::new(CardKind::Appointment)
                .with_position(Vec2::new(100.0, 100.0))
                .with_size(Size::new(400.0, 300.0)),
        );
        engine.handle_pointer_down(200.0, 116.0);

        let usable = engine.viewport().usable_rect();
        for (x, y) in moves {
            engine.handle_pointer_move(x, y);
            let card = &engine.cards()[0];
            let rect = card.rect();
            prop_assert!(
                rect.x >= usable.x
                    && rect.y >= usable.y
                    && rect.right() <= usable.right()
                    && rect.bottom() <= usable.bottom(),
                "{:?} escaped {:?}",
                rect,
                usable
            );
        }
    }

    #[test]
    fn resize_sequences_respect_bounds(
        handle in prop::sample::select(vec!["n", "s", "e", "w", "ne", "nw", "se", "sw"]),
        moves in prop::collection::vec((-3000.0f32..3000.0, -3000.0f32..3000.0), 1..40),
    ) {
        let mut engine = engine();
        let id = engine.open_card(
            CardConfig::new(CardKind::LabResult)
                .with_position(Vec2::new(300.0, 200.0))
                .with_size(Size::new(400.0, 300.0)),
        );
        engine.start_resize_drag(id, handle, 500.0, 350.0);

        for (x, y) in moves {
            engine.handle_pointer_move(x, y);
            let card = engine.card(id).unwrap();
            let bounds = card.constraints.resolve();
            prop_assert!(bounds.contains(card.dimensions), "{:?} outside bounds", card.dimensions);
            prop_assert!(engine.viewport().intersects_usable(&card.rect()));
        }
    }

    #[test]
    fn focus_tops_its_band(
        count in 2usize..8,
        maximized in prop::collection::vec(any::<bool>(), 8),
        steps in prop::collection::vec((0u8..3, 0usize..8), 1..30),
    ) {
        let mut store = store();
        let ids: Vec<u64> = (0..count)
            .map(|i| open(&mut store, 40.0 * i as f32, 100.0, 400.0, 300.0))
            .collect();
        for (&id, &max) in ids.iter().zip(&maximized) {
            if max {
                store.maximize(id);
            }
        }

        for (action, index) in steps {
            let id = ids[index % count];
            match action {
                0 => {
                    store.minimize(id);
                    continue;
                }
                1 => {
                    store.expand(id);
                    continue;
                }
                _ => store.focus(id),
            };

            let card = store.get(id).unwrap();
            if card.is_minimized() {
                continue;
            }
            let band = store.allocator().band_of(card.z_index).unwrap();
            for other in store.cards().iter().filter(|c| c.id != id) {
                let other_band = store.allocator().band_of(other.z_index).unwrap();
                if other_band <= band {
                    prop_assert!(card.z_index > other.z_index);
                }
            }
            if !store.cards().iter().any(|c| c.is_maximized()) {
                prop_assert_eq!(store.focused(), Some(id));
            }
        }
        prop_assert!(store.check_invariants().is_ok());
    }

    #[test]
    fn minimize_then_restore_is_identity(
        x in -2000.0f32..2000.0,
        y in -2000.0f32..2000.0,
        w in 100.0f32..2000.0,
        h in 100.0f32..2000.0,
        maximize_first in any::<bool>(),
        others in 0usize..4,
    ) {
        let mut store = store();
        for i in 0..others {
            let other = open(&mut store, 10.0 * i as f32, 100.0, 300.0, 250.0);
            store.minimize(other);
        }
        let id = open(&mut store, x, y, w, h);
        let before = store.get(id).unwrap().clone();

        if maximize_first {
            store.maximize(id);
        }
        store.minimize(id);
        store.expand(id);

        let after = store.get(id).unwrap();
        prop_assert_eq!(after.position, before.position);
        prop_assert_eq!(after.dimensions, before.dimensions);
        prop_assert!(store.allocator().contains(Band::Expanded, after.z_index));
    }

    #[test]
    fn tiling_never_overlaps(
        positions in prop::collection::vec((-500.0f32..1500.0, -500.0f32..1500.0), 1..7),
        width in 1400.0f32..2500.0,
        height in 1000.0f32..1400.0,
    ) {
        let mut store = store();
        store.set_viewport(width, height);
        for &(x, y) in &positions {
            store.add_card(CardConfig::new(CardKind::Diagnosis).with_position(Vec2::new(x, y)));
        }
        store.tile_all();

        let cards = store.cards();
        prop_assert_eq!(cards.len(), positions.len());
        for (i, a) in cards.iter().enumerate() {
            for b in &cards[i + 1..] {
                prop_assert!(!a.rect().intersects(&b.rect()), "{:?} overlaps {:?}", a.rect(), b.rect());
                prop_assert_ne!(a.position, b.position);
            }
        }
        prop_assert!(store.check_invariants().is_ok());
    }
}
