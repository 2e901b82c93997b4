//! Analyze a WAV file and print its event log.
//!
//! Optionally writes the first frame (playhead at 0) as SVG.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run --example analyze_wav -- take.wav [frame.svg]
//! ```

use wavescan::prelude::*;

fn main() -> wavescan::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("usage: analyze_wav <input.wav> [output.svg]");
        std::process::exit(2);
    };

    let mut scan = WaveScan::builder().build()?;
    let session = scan.load_path(&input)?;

    let playback = session.playback();
    let (_, total) = playback.readout();
    println!("{input}: {total} ({} Hz)", session.buffer().sample_rate());
    for warning in session.warnings() {
        println!("  ! {} detector failed: {}", warning.kind, warning.message);
    }
    for entry in scan.log() {
        println!("  {entry}");
    }

    if let Some(output) = args.next() {
        if let Some(frame) = scan.render() {
            std::fs::write(&output, frame.to_svg())?;
            println!("frame written to {output}");
        }
    }

    Ok(())
}
