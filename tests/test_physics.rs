use relic_run::player::*;
use relic_run::Tuning;

const IDLE: InputIntent = InputIntent {
    left: false,
    right: false,
    jump: false,
};
const JUMP: InputIntent = InputIntent {
    left: false,
    right: false,
    jump: true,
};

fn airborne() -> (Player, Tuning) {
    let tuning = Tuning::default();
    (Player::spawn(&tuning), tuning)
}

fn grounded() -> (Player, Tuning) {
    let (mut p, tuning) = airborne();
    p.grounded = true;
    (p, tuning)
}

// ── gravity ───────────────────────────────────────────────────────────────────

#[test]
fn gravity_applies_even_when_grounded() {
    let (mut p, tuning) = grounded();
    integrate(&mut p, IDLE, &tuning);
    assert!((p.vy - tuning.gravity).abs() < 1e-6);
    assert!(p.grounded); // collision decides grounding, not the integrator
}

#[test]
fn integrator_does_not_move_the_player() {
    let (mut p, tuning) = airborne();
    p.vx = 5.0;
    p.vy = 3.0;
    integrate(&mut p, IDLE, &tuning);
    assert_eq!((p.x, p.y), (tuning.spawn_x, tuning.spawn_y));
}

// ── jumping ───────────────────────────────────────────────────────────────────

#[test]
fn grounded_jump_fires_immediately() {
    let (mut p, tuning) = grounded();
    assert!(integrate(&mut p, JUMP, &tuning));
    assert_eq!(p.vy, tuning.jump_force);
    assert!(!p.grounded);
    assert_eq!(p.coyote_timer, 0);
    assert_eq!(p.jump_buffer_timer, 0);
    assert!(p.squash_y > 1.0 && p.scale_x < 1.0);
}

#[test]
fn no_jump_without_input() {
    let (mut p, tuning) = grounded();
    for _ in 0..30 {
        assert!(!integrate(&mut p, IDLE, &tuning));
        p.vy = 0.0;
    }
}

#[test]
fn coyote_window_allows_late_jump() {
    let (mut p, tuning) = grounded();
    integrate(&mut p, IDLE, &tuning);
    p.grounded = false; // walked off a ledge

    for _ in 0..3 {
        integrate(&mut p, IDLE, &tuning);
    }
    assert!(integrate(&mut p, JUMP, &tuning));
}

#[test]
fn no_jump_after_coyote_window_expires() {
    let (mut p, tuning) = grounded();
    integrate(&mut p, IDLE, &tuning);
    p.grounded = false;

    for _ in 0..10 {
        integrate(&mut p, IDLE, &tuning);
    }
    assert!(!integrate(&mut p, JUMP, &tuning));
    assert!(p.coyote_timer <= 0);
}

#[test]
fn buffered_press_fires_on_landing() {
    let (mut p, tuning) = airborne();
    assert!(!integrate(&mut p, JUMP, &tuning)); // pressed in mid-air
    integrate(&mut p, IDLE, &tuning);
    integrate(&mut p, IDLE, &tuning);

    p.grounded = true; // touched down
    assert!(integrate(&mut p, IDLE, &tuning));
}

#[test]
fn stale_buffer_does_not_fire() {
    let (mut p, tuning) = airborne();
    integrate(&mut p, JUMP, &tuning);
    for _ in 0..5 {
        integrate(&mut p, IDLE, &tuning);
    }
    p.grounded = true;
    assert!(!integrate(&mut p, IDLE, &tuning));
}

#[test]
fn closed_windows_stay_closed_at_the_timer_floor() {
    // An endless idle fall must not wrap the timers back open
    let (mut p, tuning) = airborne();
    p.coyote_timer = i32::MIN;
    p.jump_buffer_timer = i32::MIN;

    for _ in 0..3 {
        assert!(!integrate(&mut p, IDLE, &tuning));
        assert_eq!(p.coyote_timer, i32::MIN);
        assert_eq!(p.jump_buffer_timer, i32::MIN);
    }

    p.grounded = true;
    assert!(!integrate(&mut p, IDLE, &tuning));
    assert!(integrate(&mut p, JUMP, &tuning));
}

#[test]
fn releasing_jump_cuts_ascent() {
    let (mut held, tuning) = grounded();
    integrate(&mut held, JUMP, &tuning);
    let mut released = held;

    integrate(&mut held, JUMP, &tuning);
    integrate(&mut released, IDLE, &tuning);

    let rising = tuning.jump_force + tuning.gravity;
    assert!((held.vy - rising).abs() < 1e-4);
    assert!((released.vy - rising * tuning.jump_cut).abs() < 1e-4);
}

// ── horizontal ────────────────────────────────────────────────────────────────

#[test]
fn first_step_is_accel_times_friction() {
    let (mut p, tuning) = grounded();
    let right = InputIntent {
        right: true,
        ..IDLE
    };
    integrate(&mut p, right, &tuning);
    assert!((p.vx - tuning.acceleration * tuning.friction).abs() < 1e-6);
}

#[test]
fn facing_follows_last_exclusive_direction() {
    let (mut p, tuning) = grounded();
    let left = InputIntent { left: true, ..IDLE };
    let both = InputIntent {
        left: true,
        right: true,
        jump: false,
    };
    integrate(&mut p, left, &tuning);
    assert!(!p.facing_right);
    integrate(&mut p, both, &tuning);
    assert!(!p.facing_right);
}

#[test]
fn speed_is_clamped_from_outside() {
    let (mut p, tuning) = grounded();
    p.vx = -50.0;
    integrate(&mut p, IDLE, &tuning);
    assert_eq!(p.vx, -tuning.max_speed);
}
