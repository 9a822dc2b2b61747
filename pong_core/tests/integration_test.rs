use glam::Vec2;
use pong_core::input::{AutonomousController, HumanRelay, InputStrategy};
use pong_core::*;
use proptest::prelude::*;

fn humans(mode: GameMode, seed: u64) -> Simulation {
    create_simulation(
        mode,
        Params::ARENA_WIDTH,
        Params::ARENA_HEIGHT,
        Box::new(HumanRelay),
        Box::new(HumanRelay),
        GameRng::new(seed),
    )
    .unwrap()
}

fn grab() -> Intent {
    Intent {
        trying_to_grab: true,
        ..Intent::default()
    }
}

#[test]
fn test_puck_bounces_off_left_paddle_face() {
    let mut sim = humans(GameMode::classic(), 1);
    let centre = sim.config().puck_spawn();
    sim.place_puck(centre, Velocity::new(-5.0, 0.0, 7.5)).unwrap();

    while sim.puck().unwrap().vel.x() < 0.0 {
        assert!(sim.ticks() < 200, "Puck should have reached the paddle");
        sim.tick().unwrap();
    }

    let puck = sim.puck().unwrap();
    let paddle = sim.paddle(Side::Left).unwrap();
    assert_eq!(puck.vel.x(), 5.0);
    assert_eq!(puck.vel.y(), 0.0);
    assert_eq!(puck.left(), paddle.right(), "Puck sits flush with the face");
    assert!(sim.events().puck_hit_paddle);
    assert!(!sim.is_over());
}

#[test]
fn test_puck_bounces_off_floor() {
    let mut sim = humans(GameMode::classic(), 1);
    sim.place_puck(Vec2::new(400.0, 577.0), Velocity::new(0.0, 5.0, 7.5))
        .unwrap();

    sim.tick().unwrap();

    let puck = sim.puck().unwrap();
    assert_eq!(puck.vel.y(), -5.0);
    assert!(sim.events().puck_hit_wall);
    assert!(!sim.is_over());
}

#[test]
fn test_left_wall_ends_game() {
    let mut sim = humans(GameMode::classic(), 1);
    sim.place_puck(Vec2::new(2.0, 50.0), Velocity::new(-3.0, 0.0, 4.5))
        .unwrap();

    sim.tick().unwrap();

    assert!(sim.is_over());
    assert_eq!(sim.winner(), Some(Side::Right));
    assert!(matches!(sim.tick(), Err(SimError::GameOver)));
}

#[test]
fn test_goal_through_paddle_still_ends_game() {
    let mut sim = humans(GameMode::classic(), 1);
    sim.place_puck(Vec2::new(2.0, 290.0), Velocity::new(-3.0, 0.0, 4.5))
        .unwrap();

    sim.tick().unwrap();

    // Knocked off the paddle's wall-side face, already past the goal line
    assert!(sim.events().puck_hit_paddle);
    assert!(sim.puck().unwrap().left() <= 0.0);
    assert!(sim.is_over());
    assert_eq!(sim.winner(), Some(Side::Right));
}

#[test]
fn test_right_wall_ends_game() {
    let mut sim = humans(GameMode::classic(), 1);
    sim.place_puck(Vec2::new(778.0, 50.0), Velocity::new(3.0, 0.0, 4.5))
        .unwrap();

    sim.tick().unwrap();

    assert_eq!(sim.winner(), Some(Side::Left));
}

#[test]
fn test_grab_carry_and_release() {
    let mut sim = humans(GameMode::all(), 1);
    sim.place_puck(Vec2::new(22.0, 290.0), Velocity::new(-5.0, 0.0, 7.5))
        .unwrap();
    sim.set_controls(Side::Left, grab()).unwrap();

    sim.tick().unwrap();
    assert!(sim.events().puck_grabbed);
    assert_eq!(sim.puck_holder().unwrap(), Some(Side::Left));
    let held_at = sim.puck().unwrap().pos;
    assert_eq!(held_at, Vec2::new(17.0, 290.0));

    // Carried down with the paddle, own velocity ignored
    sim.set_controls(
        Side::Left,
        Intent {
            moving_down: true,
            ..grab()
        },
    )
    .unwrap();
    for _ in 0..5 {
        sim.tick().unwrap();
    }
    let speed = sim.config().paddle_move_speed;
    assert_eq!(sim.puck().unwrap().pos, held_at + Vec2::new(0.0, 5.0 * speed));
    assert_eq!(sim.puck().unwrap().vel.x(), -5.0);

    // Letting go bounces it off the face on the same tick
    sim.set_controls(Side::Left, Intent::default()).unwrap();
    sim.tick().unwrap();
    let puck = sim.puck().unwrap();
    assert_eq!(sim.puck_holder().unwrap(), None);
    assert!(sim.events().puck_released);
    assert!(puck.vel.x() > 0.0);
    assert_eq!(puck.left(), sim.paddle(Side::Left).unwrap().right());
}

#[test]
fn test_grab_needs_grabbing_mode() {
    let mut sim = humans(
        GameMode {
            grabbing: false,
            magnetic: true,
        },
        1,
    );
    sim.place_puck(Vec2::new(22.0, 290.0), Velocity::new(-5.0, 0.0, 7.5))
        .unwrap();
    sim.set_controls(Side::Left, grab()).unwrap();

    sim.tick().unwrap();

    assert_eq!(sim.puck_holder().unwrap(), None);
    assert_eq!(sim.puck().unwrap().vel.x(), 5.0);
}

#[test]
fn test_moving_paddle_attracts_puck() {
    let mut sim = humans(GameMode::all(), 1);
    sim.place_puck(Vec2::new(390.0, 290.0), Velocity::new(3.0, 0.0, 4.5))
        .unwrap();
    sim.set_controls(
        Side::Left,
        Intent {
            moving_up: true,
            ..Intent::default()
        },
    )
    .unwrap();

    sim.tick().unwrap();

    let puck = sim.puck().unwrap();
    assert!(sim.is_pulling(Side::Left).unwrap());
    assert!(puck.vel.x() < 3.0, "Pulled back toward the left paddle");
    assert!(puck.vel.magnitude() <= puck.vel.cap() + 1e-4);
}

#[test]
fn test_still_paddle_does_not_pull() {
    let mut sim = humans(GameMode::all(), 1);
    sim.place_puck(Vec2::new(390.0, 290.0), Velocity::new(3.0, 0.0, 4.5))
        .unwrap();

    sim.tick().unwrap();

    assert_eq!(sim.puck().unwrap().vel, Velocity::new(3.0, 0.0, 4.5));
}

#[test]
fn test_hot_swap_to_ai_keeps_paddle() {
    let mut sim = humans(GameMode::all(), 9);
    for _ in 0..10 {
        sim.tick().unwrap();
    }
    let before = sim.paddle(Side::Right).unwrap();

    let ai: Box<dyn InputStrategy> = Box::new(AutonomousController::new());
    sim.set_input(Side::Right, ai).unwrap();

    assert_eq!(sim.paddle(Side::Right).unwrap(), before);
    assert_eq!(sim.ticks(), 10);
    sim.tick().unwrap();
}

#[test]
fn test_restart_after_game_over() {
    let mut sim = humans(GameMode::classic(), 4);
    sim.place_puck(Vec2::new(2.0, 50.0), Velocity::new(-3.0, 0.0, 4.5))
        .unwrap();
    sim.tick().unwrap();
    assert!(sim.is_over());

    sim.restart().unwrap();

    assert!(!sim.is_over());
    assert_eq!(sim.winner(), None);
    assert_eq!(sim.puck().unwrap().pos, sim.config().puck_spawn());
    sim.tick().unwrap();
    assert_eq!(sim.ticks(), 1);
}

#[test]
fn test_ai_match_eventually_ends() {
    let mut sim = create_simulation(
        GameMode::classic(),
        Params::ARENA_WIDTH,
        Params::ARENA_HEIGHT,
        Box::new(HumanRelay),
        Box::new(AutonomousController::new()),
        GameRng::new(5),
    )
    .unwrap();

    // Aimed well above the idle left paddle
    sim.place_puck(Vec2::new(400.0, 30.0), Velocity::new(-3.0, 0.5, 4.5))
        .unwrap();
    while !sim.is_over() {
        assert!(sim.ticks() < 2_000, "Match should have ended");
        sim.tick().unwrap();
    }
    assert_eq!(sim.winner(), Some(Side::Right));
}

#[test]
fn test_same_seed_and_controls_replay_identically() {
    let script = |sim: &mut Simulation| {
        for i in 0..400u32 {
            if sim.is_over() {
                break;
            }
            let intent = Intent {
                moving_up: i % 90 < 30,
                moving_down: i % 90 >= 60,
                trying_to_grab: i % 7 == 0,
                ..Intent::default()
            };
            sim.set_controls(Side::Left, intent).unwrap();
            sim.tick().unwrap();
        }
        (sim.ticks(), sim.puck().unwrap(), sim.paddle(Side::Left).unwrap())
    };

    let mut a = humans(GameMode::all(), 77);
    let mut b = humans(GameMode::all(), 77);
    let (ticks_a, puck_a, paddle_a) = script(&mut a);
    let (ticks_b, puck_b, paddle_b) = script(&mut b);
    assert_eq!(ticks_a, ticks_b);
    assert_eq!(puck_a.pos, puck_b.pos);
    assert_eq!(puck_a.vel, puck_b.vel);
    assert_eq!(paddle_a.pos, paddle_b.pos);
}

fn intent_from_bits(bits: u8) -> Intent {
    Intent {
        moving_up: bits & 1 != 0,
        moving_down: bits & 2 != 0,
        moving_left: bits & 4 != 0,
        moving_right: bits & 8 != 0,
        trying_to_grab: bits & 16 != 0,
    }
}

proptest! {
    #[test]
    fn paddles_stay_inside_their_bounds(
        seed in any::<u64>(),
        controls in prop::collection::vec((0u8..32, 0u8..32), 1..300),
    ) {
        let mut sim = humans(GameMode::all(), seed);
        let config = sim.config().clone();

        for (left, right) in controls {
            if sim.is_over() {
                break;
            }
            sim.set_controls(Side::Left, intent_from_bits(left)).unwrap();
            sim.set_controls(Side::Right, intent_from_bits(right)).unwrap();
            sim.tick().unwrap();

            for side in Side::BOTH {
                let paddle = sim.paddle(side).unwrap();
                let (min_x, max_x) = config.paddle_bounds(side);
                prop_assert!(paddle.top() >= 0.0);
                prop_assert!(paddle.bottom() <= config.arena_height);
                prop_assert!(paddle.left() >= min_x);
                prop_assert!(paddle.right() <= max_x);
            }
        }
    }

    #[test]
    fn puck_speed_never_exceeds_cap(
        seed in any::<u64>(),
        controls in prop::collection::vec((0u8..32, 0u8..32), 1..300),
    ) {
        let mut sim = humans(GameMode::all(), seed);

        for (left, right) in controls {
            if sim.is_over() {
                break;
            }
            sim.set_controls(Side::Left, intent_from_bits(left)).unwrap();
            sim.set_controls(Side::Right, intent_from_bits(right)).unwrap();
            sim.tick().unwrap();

            let vel = sim.puck().unwrap().vel;
            prop_assert!(vel.as_vec2().length() <= vel.cap() + 1e-3);
        }
    }

    #[test]
    fn held_puck_moves_only_with_its_holder(
        seed in any::<u64>(),
        controls in prop::collection::vec((0u8..32, 0u8..32), 1..300),
    ) {
        let mut sim = humans(GameMode::all(), seed);

        for (left, right) in controls {
            if sim.is_over() {
                break;
            }
            sim.set_controls(Side::Left, intent_from_bits(left)).unwrap();
            sim.set_controls(Side::Right, intent_from_bits(right)).unwrap();

            let holder_before = sim.puck_holder().unwrap();
            let puck_before = sim.puck().unwrap();
            let paddles_before = Side::BOTH.map(|side| sim.paddle(side).unwrap());

            sim.tick().unwrap();

            let holder_after = sim.puck_holder().unwrap();
            if let (Some(before), Some(after)) = (holder_before, holder_after) {
                prop_assert_eq!(before, after, "A held puck cannot be stolen");
                let paddle_delta =
                    sim.paddle(after).unwrap().pos - paddles_before[after.index()].pos;
                let puck_delta = sim.puck().unwrap().pos - puck_before.pos;
                prop_assert!((puck_delta - paddle_delta).length() < 1e-3);
            }
        }
    }
}
