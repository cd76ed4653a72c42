use macroquad::math::{Vec2, vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;

use road_raider::assets::Assets;
use road_raider::bullet::Bullet;
use road_raider::character::Character;
use road_raider::config::*;
use road_raider::input::Intents;
use road_raider::sprite::Sprite;
use road_raider::world::{GameStatus, World};

const DT: f32 = 1.0 / 60.0;

fn world() -> World {
    World::new(&Assets::default())
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// A bullet that sits still, so a scenario can place it exactly.
fn stationary_bullet_at(pos: Vec2) -> Bullet {
    Bullet::new(
        Sprite::single(None, vec2(BULLET_W, BULLET_H), pos),
        Vec2::ZERO,
    )
}

/// An enemy that will not fire during the scenario ticks.
fn quiet_enemy_at(pos: Vec2) -> Character {
    let mut enemy = Character::new(
        Sprite::single(None, vec2(ENEMY_DEST_W, ENEMY_DEST_H), pos),
        100.0,
        ENEMY_FIRE_DELAY,
        1,
    );
    enemy.fire_timer = 30.0;
    enemy
}

// ── Scenario 1: enemy bullet hits the player ─────────────────────────────────

#[test]
fn enemy_bullet_hit_costs_one_life_and_consumes_the_bullet() {
    let mut w = world();
    let mut rng = seeded_rng();
    let player_pos = w.player.sprite.position;
    w.enemy_bullets.push(stationary_bullet_at(player_pos));

    let events = w.update(&Intents::default(), DT, &mut rng);

    assert_eq!(w.player.lives, PLAYER_START_LIVES - 1);
    assert!(w.enemy_bullets.is_empty());
    assert!(events.player_hit);
    assert!(!events.game_over);
    // A surviving hit refills hit points for the next life.
    assert_eq!(w.player.hit_points, PLAYER_MAX_HIT_POINTS);
    assert_eq!(w.status, GameStatus::Playing);
}

// ── Scenario 2: lives reach zero, updates freeze until restart ───────────────

#[test]
fn losing_all_lives_transitions_to_game_over_and_freezes_the_world() {
    let mut w = world();
    let mut rng = seeded_rng();

    for _ in 0..PLAYER_START_LIVES {
        let player_pos = w.player.sprite.position;
        w.enemy_bullets.push(stationary_bullet_at(player_pos));
        w.update(&Intents::default(), DT, &mut rng);
    }
    assert_eq!(w.status, GameStatus::GameOver);
    assert_eq!(w.player.lives, 0);

    // Movement intents are ignored while game-over.
    let frozen_pos = w.player.sprite.position;
    let moving = Intents {
        right: true,
        down: true,
        fire: true,
        ..Default::default()
    };
    let events = w.update(&moving, DT, &mut rng);
    assert_eq!(w.player.sprite.position, frozen_pos);
    assert_eq!(events, Default::default());
    assert!(w.player_bullets.is_empty());

    w.restart();
    assert_eq!(w.status, GameStatus::Playing);
    assert_eq!(w.player.lives, PLAYER_START_LIVES);

    // Updates are accepted again.
    w.update(&moving, DT, &mut rng);
    assert!(w.player.sprite.position != frozen_pos);
}

// ── Scenario 3: player bullet kills exactly one of two enemies ───────────────

#[test]
fn player_bullet_removes_one_enemy_and_scores_ten() {
    let mut w = world();
    let mut rng = seeded_rng();

    let near = vec2(600.0, ENEMY_SPAWN_Y);
    let far = vec2(1000.0, ENEMY_SPAWN_Y);
    w.enemies.push(quiet_enemy_at(near));
    w.enemies.push(quiet_enemy_at(far));
    // Bullet centered on the first enemy.
    w.player_bullets
        .push(stationary_bullet_at(near + vec2(60.0, 60.0)));

    let events = w.update(&Intents::default(), DT, &mut rng);

    assert_eq!(w.enemies.len(), 1);
    assert!((w.enemies[0].sprite.position.x - far.x).abs() < 10.0);
    assert!(w.player_bullets.is_empty());
    assert_eq!(w.player.score, SCORE_PER_KILL);
    assert!(events.enemy_destroyed);
}

// ── Scenario 4: spawn timer ──────────────────────────────────────────────────

#[test]
fn expired_spawn_timer_produces_exactly_one_enemy_and_resets() {
    let mut w = world();
    let mut rng = seeded_rng();
    w.spawn_timer = -0.3;

    w.update(&Intents::default(), DT, &mut rng);

    assert_eq!(w.enemies.len(), 1);
    let spawned = &w.enemies[0];
    assert!(spawned.move_speed >= ENEMY_SPEED_MIN);
    assert!(spawned.move_speed <= ENEMY_SPEED_MAX);
    assert_eq!(spawned.sprite.position, vec2(ENEMY_SPAWN_X, ENEMY_SPAWN_Y));
    assert_eq!(w.spawn_timer, ENEMY_SPAWN_DELAY);
}

#[test]
fn spawn_timer_counts_down_without_spawning_early() {
    let mut w = world();
    let mut rng = seeded_rng();
    let before = w.spawn_timer;

    w.update(&Intents::default(), DT, &mut rng);

    assert!(w.enemies.is_empty());
    assert!(w.spawn_timer < before);
}

// ── Off-screen reaping ───────────────────────────────────────────────────────

#[test]
fn reap_is_idempotent() {
    let mut w = world();
    w.player_bullets
        .push(stationary_bullet_at(vec2(-100.0, 400.0)));
    w.player_bullets.push(stationary_bullet_at(vec2(600.0, 400.0)));
    w.enemy_bullets
        .push(stationary_bullet_at(vec2(SCREEN_WIDTH + 50.0, 400.0)));
    w.enemies
        .push(quiet_enemy_at(vec2(SCREEN_WIDTH + 300.0, ENEMY_SPAWN_Y)));

    w.reap_offscreen();
    assert_eq!(w.player_bullets.len(), 1);
    assert!(w.enemy_bullets.is_empty());
    assert!(w.enemies.is_empty());

    // Nothing moved, so a second pass removes nothing further.
    w.reap_offscreen();
    assert_eq!(w.player_bullets.len(), 1);
}

#[test]
fn entity_at_screen_edge_is_not_reaped() {
    let mut w = world();
    // A freshly spawned enemy sits exactly at the right edge.
    w.enemies
        .push(quiet_enemy_at(vec2(ENEMY_SPAWN_X, ENEMY_SPAWN_Y)));
    w.reap_offscreen();
    assert_eq!(w.enemies.len(), 1);
}

// ── Player movement clamping ─────────────────────────────────────────────────

#[test]
fn player_is_clamped_to_upper_left_of_the_lane() {
    let mut w = world();
    let mut rng = seeded_rng();
    w.player.lives = i32::MAX; // keep the round alive for the whole walk
    let held = Intents {
        up: true,
        left: true,
        ..Default::default()
    };

    for _ in 0..300 {
        w.update(&held, DT, &mut rng);
        let pos = w.player.sprite.position;
        let size = w.player.sprite.size();
        assert!(pos.x >= 0.0 && pos.x <= SCREEN_WIDTH - size.x);
        assert!(pos.y >= LANE_TOP && pos.y <= LANE_BOTTOM - size.y);
    }
    assert_eq!(w.player.sprite.position, vec2(0.0, LANE_TOP));
}

#[test]
fn player_is_clamped_to_lower_right_of_the_lane() {
    let mut w = world();
    let mut rng = seeded_rng();
    w.player.lives = i32::MAX;
    let held = Intents {
        down: true,
        right: true,
        ..Default::default()
    };

    for _ in 0..400 {
        w.update(&held, DT, &mut rng);
        let pos = w.player.sprite.position;
        let size = w.player.sprite.size();
        assert!(pos.x >= 0.0 && pos.x <= SCREEN_WIDTH - size.x);
        assert!(pos.y >= LANE_TOP && pos.y <= LANE_BOTTOM - size.y);
    }
    let size = w.player.sprite.size();
    assert_eq!(
        w.player.sprite.position,
        vec2(SCREEN_WIDTH - size.x, LANE_BOTTOM - size.y)
    );
}

// ── Firing ───────────────────────────────────────────────────────────────────

#[test]
fn held_fire_respects_the_cooldown() {
    let mut w = world();
    let mut rng = seeded_rng();
    let firing = Intents {
        fire: true,
        ..Default::default()
    };

    let events = w.update(&firing, DT, &mut rng);
    assert_eq!(w.player_bullets.len(), 1);
    assert_eq!(w.player_bullets[0].velocity, vec2(PLAYER_BULLET_SPEED, 0.0));
    assert!(events.player_fired);

    // Still cooling down the very next frame.
    let events = w.update(&firing, DT, &mut rng);
    assert_eq!(w.player_bullets.len(), 1);
    assert!(!events.player_fired);
}

#[test]
fn ready_enemy_fires_leftward_once_per_cooldown() {
    let mut w = world();
    let mut rng = seeded_rng();
    let mut enemy = quiet_enemy_at(vec2(900.0, ENEMY_SPAWN_Y));
    enemy.fire_timer = 0.0;
    w.enemies.push(enemy);

    let events = w.update(&Intents::default(), DT, &mut rng);

    assert_eq!(w.enemy_bullets.len(), 1);
    assert_eq!(w.enemy_bullets[0].velocity, vec2(-ENEMY_BULLET_SPEED, 0.0));
    assert!(events.enemy_fired);
    assert!(w.enemies[0].fire_timer > 0.0);
}

#[test]
fn enemies_drift_leftward() {
    let mut w = world();
    let mut rng = seeded_rng();
    w.enemies.push(quiet_enemy_at(vec2(900.0, ENEMY_SPAWN_Y)));

    w.update(&Intents::default(), DT, &mut rng);

    let expected_x = 900.0 - 100.0 * DT;
    assert!((w.enemies[0].sprite.position.x - expected_x).abs() < 1e-3);
}

// ── Restart ──────────────────────────────────────────────────────────────────

#[test]
fn restart_clears_state_and_folds_score_into_the_running_total() {
    let mut w = world();
    w.player.score = 30;
    w.enemies.push(quiet_enemy_at(vec2(900.0, ENEMY_SPAWN_Y)));
    w.player_bullets.push(stationary_bullet_at(vec2(500.0, 400.0)));
    w.enemy_bullets.push(stationary_bullet_at(vec2(700.0, 400.0)));
    w.status = GameStatus::GameOver;

    w.restart();

    assert_eq!(w.status, GameStatus::Playing);
    assert!(w.enemies.is_empty());
    assert!(w.player_bullets.is_empty());
    assert!(w.enemy_bullets.is_empty());
    assert_eq!(w.player.score, 0);
    assert_eq!(w.high_score, 30);
    assert_eq!(w.player.lives, PLAYER_START_LIVES);
    assert_eq!(w.player.sprite.position, vec2(PLAYER_START_X, PLAYER_START_Y));
    assert_eq!(w.spawn_timer, ENEMY_SPAWN_DELAY);

    // A second round keeps accumulating.
    w.player.score = 20;
    w.restart();
    assert_eq!(w.high_score, 50);
}
