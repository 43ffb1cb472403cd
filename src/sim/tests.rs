// Whole-frame scenarios, driven headlessly

use super::*;

const W: u32 = 800;
const H: u32 = 600;

fn scene() -> Scene {
    Scene::new(W, H, SceneConfig::default())
}

fn pointer_on(scene: &Scene) -> Pointer {
    Pointer { x: scene.pig.x, y: scene.pig.center_y(scene.floor_y()) }
}

#[test]
fn test_close_pointer_trips_walking_pig() {
    let mut scene = scene();
    scene.pig.x = 500.0;
    let center = scene.pig.center_y(scene.floor_y());

    scene.tick(Pointer { x: 510.0, y: center });

    assert_eq!(scene.pig.mood, Mood::Tripping { timer: 0 });
    assert_eq!(scene.pig.x, 500.0);
}

#[test]
fn test_pointer_at_threshold_does_not_trip() {
    let mut scene = scene();
    scene.pig.x = 500.0;
    let center = scene.pig.center_y(scene.floor_y());

    scene.tick(Pointer { x: 545.0, y: center });

    assert_eq!(scene.pig.mood, Mood::Walking);
}

#[test]
fn test_full_trip_sit_cry_sequence() {
    let mut scene = scene();
    scene.pig.x = 300.0;
    scene.frame = 1;
    let p = pointer_on(&scene);
    scene.tick(p);
    assert!(scene.pig.mood.is_tripping());

    let away = Pointer::default();
    for _ in 0..51 {
        scene.tick(away);
    }
    assert_eq!(scene.pig.mood, Mood::Sitting { timer: 0, crying: false });
    assert_eq!(scene.pig.rotation, 0.8);

    for _ in 0..30 {
        scene.tick(away);
    }
    assert_eq!(scene.pig.mood, Mood::Sitting { timer: 30, crying: false });
    assert_eq!(scene.tears.n, 0);

    scene.tick(away);
    assert!(scene.pig.mood.is_crying());

    let mut shed = 0;
    for _ in 0..219 {
        scene.tick(away);
        shed = shed.max(scene.tears.n);
    }
    assert_eq!(scene.pig.mood, Mood::Sitting { timer: 250, crying: true });
    assert!(shed > 0);
    // Never moved while down
    assert_eq!(scene.pig.x, 300.0);

    scene.tick(away);
    assert_eq!(scene.pig.mood, Mood::Walking);
    assert_eq!(scene.pig.rotation, 0.0);
}

#[test]
fn test_landed_coin_in_reach_is_eaten() {
    let mut scene = scene();
    scene.frame = 1;
    scene.pig.x = 300.0;
    let rest = scene.floor_y() - COIN_REST;
    let i = scene.coins.seed_landed(340.0, rest).unwrap();

    let eaten = scene.tick(Pointer::default());

    assert_eq!(eaten, 1);
    assert!(!scene.coins.active[i]);
    assert_eq!(scene.particles.n, 6);
    assert_eq!(scene.labels.n, 1);
    assert_eq!(scene.labels.text[0], REWARD_TEXT);
}

#[test]
fn test_falling_coin_is_not_eaten() {
    let mut scene = scene();
    scene.frame = 1;
    scene.pig.x = 300.0;
    let rest = scene.floor_y() - COIN_REST;
    let i = scene.coins.seed_landed(340.0, rest).unwrap();
    scene.coins.landed[i] = false;
    scene.coins.y[i] = rest - 200.0;
    scene.coins.vy[i] = 0.0;

    assert_eq!(scene.tick(Pointer::default()), 0);
    assert!(scene.coins.active[i]);
    assert_eq!(scene.particles.n, 0);
}

#[test]
fn test_boundary_reset() {
    let mut scene = scene();
    scene.frame = 1;
    scene.pig.x = W as f32 + 61.0;
    scene.pig.mood = Mood::Sitting { timer: 100, crying: true };
    scene.pig.rotation = -0.2;
    let mut rng = 3;
    scene.particles.burst(10.0, 10.0, &mut rng);
    scene.tears.spawn(10.0, 10.0, &mut rng);
    scene.labels.spawn(10.0, 10.0, REWARD_TEXT);
    scene.coins.seed_landed(600.0, 100.0);

    scene.tick(Pointer::default());

    assert_eq!(scene.pig.x, START_X);
    assert_eq!(scene.pig.mood, Mood::Walking);
    assert_eq!(scene.pig.rotation, 0.0);
    assert_eq!(scene.particles.n, 0);
    assert_eq!(scene.tears.n, 0);
    assert_eq!(scene.labels.n, 0);
    assert_eq!(scene.coins.n, 1);
    assert_eq!(scene.coins.x[0], STARTER_COIN_X);
    assert!(scene.coins.active[0] && scene.coins.landed[0]);
    assert_eq!(scene.coins.y[0], scene.floor_y() - COIN_REST);
}

#[test]
fn test_zero_width_is_a_no_op() {
    let mut scene = Scene::new(0, H, SceneConfig::default());
    let x = scene.pig.x;

    assert_eq!(scene.tick(Pointer::default()), 0);
    assert_eq!(scene.frame, 0);
    assert_eq!(scene.coins.n, 0);
    assert_eq!(scene.pig.x, x);

    scene.resize(W, H);
    scene.tick(Pointer::default());
    assert_eq!(scene.frame, 1);
    assert_eq!(scene.coins.n, 1);
}

#[test]
fn test_spawns_stay_ahead_and_capped() {
    let mut scene = scene();
    let mut spawned = 0;
    let mut eaten = 0;
    let mut laps = 0;

    for step in 0..20_000u32 {
        // Sweep the pointer across the floor now and then
        let pointer = if step % 900 < 60 {
            Pointer { x: (step % 900) as f32 * 13.0, y: scene.floor_y() - 20.0 }
        } else {
            Pointer::default()
        };

        let before_n = scene.coins.n;
        let before_x = scene.pig.x;
        let will_spawn = scene.frame % scene.config.spawn_every == 0
            && scene.coins.active_count() < MAX_ACTIVE_COINS;
        let furthest = scene.coins.furthest_active(scene.pig.x);

        eaten += scene.tick(pointer);

        let reset = scene.pig.x < before_x;
        if reset {
            laps += 1;
        } else if will_spawn {
            assert_eq!(scene.coins.n, before_n + 1);
            assert!(scene.coins.x[before_n] > furthest + 150.0);
            spawned += 1;
        }

        assert!(scene.coins.active_count() <= MAX_ACTIVE_COINS);
        if scene.pig.mood != Mood::Walking {
            assert!(!scene.pig.eating);
        }
    }

    assert!(spawned > 10);
    assert!(eaten > 0);
    assert!(laps > 0);
}
