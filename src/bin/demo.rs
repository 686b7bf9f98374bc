//! Scripted persona demo.
//!
//! Replays a short conversation against a fresh engine and prints the
//! directive report plus the rendered prompt context after each message.
//! The only place in the crate that reads a wall clock.
//!
//! ```text
//! RUST_LOG=debug cargo run --bin demo
//! ```

use anyhow::Result;
use chrono::Utc;

use asteria::{EngineConfig, PersonaEngine};

const INTERACTIONS: [&str; 4] = [
    "Oi, como você está?",
    "Estou muito feliz hoje! Consegui resolver aquele problema de lógica",
    "Mas agora estou cansado, foi muito desgastante",
    "O que você acha da natureza paradoxal da existência humana?",
];

fn main() -> Result<()> {
    env_logger::init();

    let mut engine = PersonaEngine::new(EngineConfig::default())?;
    println!(
        "{} online (asteria {}) - {}",
        engine.identity().name,
        asteria::VERSION,
        engine.identity().description
    );

    for (i, text) in INTERACTIONS.iter().enumerate() {
        println!("\n=== INTERACTION {} ===", i + 1);
        println!("User: {text}");

        let report = engine.analyze(text, "default", Utc::now());

        println!("\nTone: {}", report.tone);
        println!("Valence: {:.2}", report.valence);
        println!("Arousal: {:.2}", report.arousal);
        println!("Fatigue: {:.2}", report.fatigue);
        println!("Familiarity: {:.2}", report.familiarity);
        println!("Directives: {:?}", report.directives);

        println!("\n{}", engine.render_context(&report));
    }

    println!("History entries: {}", engine.history().len());
    Ok(())
}
