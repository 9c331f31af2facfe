use std::{env, error::Error, fs};

use log::{info, warn};

mod blocks;
mod collision;
mod game;
mod interaction;
mod inventory;
mod player;
mod survival;
mod targeting;
mod visibility;
mod world;

use game::{Game, GameMode};
use interaction::EditAction;
use player::MovementIntent;
use world::GeneratorConfig;

const TICK_RATE: f32 = 60.0;
const DEMO_TICKS: u32 = 600;

fn parse_args(args: env::Args) -> Result<(GameMode, GeneratorConfig), Box<dyn Error>> {
    let mut mode = GameMode::Flight;
    let mut config = GeneratorConfig::default();
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--survival" | "-s" => mode = GameMode::Survival,
            "--config" => {
                let path = args.next().ok_or("--config requires a file path")?;
                let raw = fs::read_to_string(&path)?;
                config = serde_json::from_str(&raw)?;
                info!("Loaded generator config from {path}");
            }
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }
    Ok((mode, config))
}

/// Headless demo loop: walk forward over the terrain for ten simulated
/// seconds, jumping now and then and digging whatever the crosshair
/// lands on.
fn run(mut game: Game) {
    let dt = 1.0 / TICK_RATE;
    let mut removed = 0;
    for tick in 0..DEMO_TICKS {
        let intent = MovementIntent {
            forward: 1.0,
            jump: tick % 120 == 0,
            ..Default::default()
        };
        game.tick(&intent, dt);

        if tick % 90 == 0 {
            // Glance down so the ray has terrain to hit
            game.player_mut().pitch = -0.9;
            let result = game.perform_edit(EditAction::Remove, blocks::STONE);
            if let Some(id) = result.removed_id {
                removed += 1;
                info!("Tick {tick}: dug up block {id}");
            }
            game.player_mut().pitch = 0.0;
        }

        if !game.is_alive() {
            warn!("Player died at tick {tick}");
            break;
        }
    }
    info!(
        "Demo finished at {} with {removed} blocks dug, health {:.0}, food {:.0}",
        game.player().position,
        game.health(),
        game.food()
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let (mode, config) = parse_args(env::args())?;
    let mut game = Game::new(mode, config);
    game.set_interaction_mode("creative")?;
    run(game);
    Ok(())
}
