//! Headless demo driver
//!
//! Runs the collision core the way a game loop would, one step per simulated
//! frame, without any rendering: a hand-laid block field, a death strip along
//! the open bottom edge, a remover wired to every block, and an exit listener
//! on the ball. Prints a JSON run report when the run ends.
//!
//! `RUST_LOG=debug cargo run` traces individual collisions.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Serialize;

use brickbreak::color::Color;
use brickbreak::consts;
use brickbreak::geometry::{Point, Rect};
use brickbreak::sim::{
    Ball, Environment, HitListener, HitNotifier, SharedCollidable, SharedEnvironment,
    SharedListener, Velocity,
};
use brickbreak::world::{Block, BlockRemover, Counter, SharedCounter};

const MAX_STEPS: u64 = 20_000;

#[derive(Serialize)]
struct RunReport {
    steps: u64,
    blocks_remaining: i64,
    exited: bool,
    final_center: Point,
    final_velocity: Velocity,
}

/// Flags the run as over when the ball reports a death-zone strike.
struct ExitFlag(Rc<Cell<bool>>);

impl HitListener for ExitFlag {
    fn hit_event(&mut self, _being_hit: &SharedCollidable, _hitter: &mut Ball) {
        log::info!("ball left play through a death zone");
        self.0.set(true);
    }
}

/// Two rows of blocks across the upper playfield.
fn lay_out_blocks(env: &SharedEnvironment, remaining: &SharedCounter) {
    let colors = [Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW];
    let block_width = 50.0;
    let block_height = 20.0;

    for row in 0..2 {
        for col in 0..10 {
            let upper_left = Point::new(
                consts::SIDE_BORDER + 100.0 + col as f64 * block_width,
                100.0 + row as f64 * block_height,
            );
            let rect = Rect::new(upper_left, block_width, block_height);
            let block: SharedCollidable = Rc::new(RefCell::new(Block::new(
                rect,
                colors[(row + col) % colors.len()],
            )));

            let remover: SharedListener = Rc::new(RefCell::new(BlockRemover::new(
                Rc::clone(env),
                Rc::clone(remaining),
            )));
            block.borrow_mut().add_hit_listener(remover);

            env.borrow_mut().add_collidable(block);
            remaining.increase(1);
        }
    }
}

fn main() {
    env_logger::init();

    let env: SharedEnvironment = Rc::new(RefCell::new(Environment::new()));
    let remaining: SharedCounter = Rc::new(Counter::new(0));
    lay_out_blocks(&env, &remaining);

    // Death strip along the open bottom edge, so exit is rectangle-driven
    // and observable, not just "the ball fell off".
    let strip: SharedCollidable = Rc::new(RefCell::new(Block::new_death_zone(
        Rect::new(
            Point::new(0.0, consts::WORLD_HEIGHT - 10.0),
            consts::WORLD_WIDTH,
            10.0,
        ),
        Color::GRAY,
    )));
    env.borrow_mut().add_collidable(strip);

    let exited = Rc::new(Cell::new(false));
    let mut ball = Ball::new(
        Point::new(consts::WORLD_WIDTH / 2.0, 450.0),
        consts::BALL_RADIUS,
        Color::WHITE,
        Velocity::from_angle_speed(30.0, 7.0),
    )
    .expect("demo ball radius is positive");
    ball.set_environment(Some(Rc::clone(&env)));
    ball.add_hit_listener(Rc::new(RefCell::new(ExitFlag(Rc::clone(&exited)))));

    let mut steps = 0;
    while steps < MAX_STEPS && !exited.get() && remaining.value() > 0 {
        ball.move_one_step();
        steps += 1;
    }

    if exited.get() {
        ball.remove_listeners();
        ball.set_environment(None);
    }

    let report = RunReport {
        steps,
        blocks_remaining: remaining.value(),
        exited: exited.get(),
        final_center: ball.center(),
        final_velocity: ball.velocity(),
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("report serialization failed: {err}"),
    }
}
