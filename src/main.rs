use dp_setup::{AlgorithmFamily, AlignConfig, AlignOptions, Aligner, SimpleScore};

// Placeholder engine: the demo only resolves profiles.
struct NoEngine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let seq_h = b"ACGTACGT";
    let seq_v = b"ACGTAGCT";
    let scoring = SimpleScore::default();

    let options = AlignOptions::new()
        .with_end_gaps(AlignConfig::all_free())
        .with_band(-2, 2)?;

    for family in AlgorithmFamily::ALL {
        let aligner = Aligner::new(NoEngine, family);
        let profile = aligner.resolve(seq_h, seq_v, &scoring, &options, true);
        println!("{}", profile);
    }

    Ok(())
}
