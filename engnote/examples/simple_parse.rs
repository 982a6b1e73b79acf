//! Simple example: parse the values given on the command line and echo them back formatted.

use engnote::prelude::*;

fn main() -> anyhow::Result<()> {
    let inputs: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if inputs.is_empty() {
        vec!["4k7".to_string(), "100nF".to_string(), "1,234.56 mV".to_string()]
    } else {
        inputs
    };

    let codec = Codec::builtin()?;

    let mut magnitudes = Vec::new();
    for input in &inputs {
        let q = codec.parse(input)?;
        println!(
            "{:>14} -> {:e} {:<4} display: {}",
            input,
            q.magnitude,
            q.unit,
            codec.format_with_unit(q.magnitude, &q.unit)?
        );
        magnitudes.push(q.magnitude);
    }

    let scale = codec.auto_scale(&magnitudes);
    println!("\nShared scale: '{}' (x{})", scale.suffix, scale.multiplier);
    for m in &magnitudes {
        println!("  {}", codec.render_scaled(*m, &scale, ""));
    }

    Ok(())
}
