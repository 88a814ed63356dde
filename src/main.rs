//! Demo binary: stream an animation over a procedural cone mesh to stdout.
//!
//! ```text
//! glimmer [collision|sweep]
//! ```
//!
//! Set `RUST_LOG=debug` to watch phase transitions.

use glimmer::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut rng = SmallRng::from_entropy();
    let mesh = LightMesh::conical(500, &mut rng)?;
    let seed: u64 = rng.gen();

    let stdout = io::stdout().lock();
    let sink = TextSink::new(stdout);

    let which = env::args().nth(1).unwrap_or_else(|| "collision".into());
    match which.as_str() {
        "collision" => {
            let effect = CollisionEffect::new(CollisionConfig::default(), seed)?;
            Player::new(mesh, effect, sink).run()?;
        }
        "sweep" => {
            let effect = SweepEffect::new(SweepConfig::default(), seed)?;
            // The sweep paints every light each tick; clearing is redundant.
            Player::new(mesh, effect, sink).with_clear(false).run()?;
        }
        other => {
            eprintln!("unknown effect '{}', expected 'collision' or 'sweep'", other);
            std::process::exit(2);
        }
    }
    Ok(())
}
