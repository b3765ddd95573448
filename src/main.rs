//! Fairdeck Demo
//!
//! Runs one provably fair round end to end: commit, shuffle, prove,
//! verify. An optional first argument supplies the seed (64 hex chars).

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fairdeck::{
    generate_shuffle_proof, shuffle_with_seed, verify_shuffle_proof, verify_shuffle_with_seed,
    VERSION,
};

const RANKS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];
const SUITS: [&str; 4] = ["♠", "♥", "♦", "♣"];

fn main() {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Fairdeck v{}", VERSION);

    let provided = std::env::args().nth(1);
    if let Err(e) = run_round(provided.as_deref()) {
        eprintln!("round failed: {e}");
        std::process::exit(1);
    }
}

/// One complete commit-shuffle-verify round.
fn run_round(provided_seed: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    // Standard 52-card deck
    let deck: Vec<String> = SUITS
        .iter()
        .flat_map(|s| RANKS.iter().map(move |r| format!("{r}{s}")))
        .collect();

    // 1. Proof first: seedHash is what the operator publishes before
    //    the round begins.
    let proof = generate_shuffle_proof(provided_seed)?;
    info!("Pre-commitment (seedHash): {}", proof.seed_hash);

    // 2. Shuffle under the committed seed
    let shuffled = shuffle_with_seed(&deck, &proof.seed)?;
    info!("Top five cards: {}", shuffled[..5].join(" "));

    // 3. Publish the proof
    info!("Proof: {}", proof.to_json()?);

    // 4. Anyone can now audit the round
    let structural = verify_shuffle_proof(&proof);
    info!(
        "Structural check: {}",
        if structural.valid { "PASS" } else { "FAIL" }
    );
    if let Some(message) = structural.message() {
        info!("  first failing check: {message}");
    }

    let reproduced = verify_shuffle_with_seed(&deck, &shuffled, &proof.seed);
    info!(
        "Reproduction check: {}",
        if reproduced { "PASS" } else { "FAIL" }
    );

    Ok(())
}
