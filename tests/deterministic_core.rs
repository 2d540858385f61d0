use homestead_idle::{
    EngineConfig, FixedClock, GameEngine, GameError, ResourceId, SchedulerState, SeedData,
};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= EPSILON,
        "expected {expected}, got {actual}"
    );
}

fn engine() -> GameEngine {
    let seed = SeedData::bundled().expect("bundled seed data");
    let config = EngineConfig {
        rng_seed: Some(42),
        ..EngineConfig::default()
    };
    GameEngine::with_clock(seed, config, FixedClock(1_000))
}

fn value(engine: &GameEngine, id: &str) -> f64 {
    engine
        .resource_store()
        .value(&ResourceId::from(id))
        .expect("resource exists")
}

#[test]
fn seeded_session_plays_through_click_build_and_upgrade() {
    let mut engine = engine();
    let mut request = engine.start(0.0).expect("session active");
    let mut now = 0.0;
    let mut advance = |engine: &mut GameEngine, delta: f64| {
        now += delta;
        request = engine
            .frame(request, now)
            .expect("tick succeeds")
            .expect("scheduler running");
    };

    advance(&mut engine, 1000.0);
    assert_close(value(&engine, "food"), 1.0);
    assert_close(value(&engine, "stone"), 1.0);

    engine
        .update_resource_click(&"food".into())
        .expect("food exists");
    assert_close(value(&engine, "food"), 2.0);

    engine.add_building(&"farm".into(), 1).expect("farm exists");
    let farm = engine
        .building_store()
        .building(&"farm".into())
        .expect("farm exists");
    assert_eq!(farm.amount, 2);

    advance(&mut engine, 1000.0);
    assert_close(value(&engine, "food"), 4.0);

    engine
        .apply_game_upgrade(&"doubleFarms".into())
        .expect("doubleFarms exists");
    let farm = engine
        .building_store()
        .building(&"farm".into())
        .expect("farm exists");
    assert_close(farm.base_rate, 2.0);
    assert_eq!(engine.log_messages().len(), 1);

    advance(&mut engine, 1000.0);
    assert_close(value(&engine, "food"), 8.0);
    assert_close(value(&engine, "stone"), 3.0);
}

#[test]
fn double_farms_doubles_rate_and_keeps_amount() {
    let mut engine = engine();
    engine.add_building(&"farm".into(), 4).expect("farm exists");
    let before = engine
        .building_store()
        .building(&"farm".into())
        .expect("farm exists")
        .clone();

    engine
        .apply_game_upgrade(&"doubleFarms".into())
        .expect("doubleFarms exists");

    let after = engine
        .building_store()
        .building(&"farm".into())
        .expect("farm exists");
    assert_close(after.base_rate, before.base_rate * 2.0);
    assert_eq!(after.amount, before.amount);
}

#[test]
fn unknown_ids_fail_without_mutation() {
    let mut engine = engine();
    let resources = engine.resources();
    let buildings = engine.buildings();

    let errors = [
        engine
            .update_resource_click(&"nonexistent".into())
            .expect_err("unknown resource"),
        engine
            .add_building(&"nonexistent".into(), 1)
            .expect_err("unknown building"),
        engine
            .apply_game_upgrade(&"nonexistent".into())
            .expect_err("unknown upgrade"),
    ];

    assert!(errors.iter().all(GameError::is_not_found));
    assert_eq!(engine.resources(), resources);
    assert_eq!(engine.buildings(), buildings);
    assert!(engine.log_messages().is_empty());
}

#[test]
fn stop_then_start_does_not_catch_up() {
    let mut engine = engine();
    let request = engine.start(0.0).expect("session active");
    let request = engine
        .frame(request, 1000.0)
        .expect("tick succeeds")
        .expect("scheduler running");

    engine.stop();
    assert_eq!(engine.scheduler_state(), SchedulerState::Stopped);
    assert_eq!(engine.frame(request, 5_000.0), Ok(None));

    let resumed = engine.start(60_000.0).expect("session active");
    engine
        .frame(resumed, 60_500.0)
        .expect("tick succeeds")
        .expect("scheduler running");

    assert_close(value(&engine, "food"), 1.5);
    assert_eq!(engine.tick_index(), 2);
}

#[test]
fn fps_tracks_recent_frames() {
    let mut engine = engine();
    assert_eq!(engine.fps(), "0");

    let mut request = engine.start(0.0).expect("session active");
    let mut now = 0.0;
    for _ in 0..30 {
        now += 20.0;
        request = engine
            .frame(request, now)
            .expect("tick succeeds")
            .expect("scheduler running");
    }

    assert_eq!(engine.fps(), "50.00");
}

#[test]
fn identical_seeds_replay_identically() {
    let mut a = engine();
    let mut b = engine();

    for _ in 0..5 {
        for engine in [&mut a, &mut b] {
            engine
                .apply_game_upgrade(&"doubleFarms".into())
                .expect("doubleFarms exists");
            engine.do_tick(16.0).expect("tick succeeds");
        }
    }

    assert_eq!(a.log_messages(), b.log_messages());
    assert_eq!(a.resources(), b.resources());
    assert_eq!(a.buildings(), b.buildings());
    assert_eq!(
        a.upgrade_catalog().times_applied(&"doubleFarms".into()),
        5
    );
}
