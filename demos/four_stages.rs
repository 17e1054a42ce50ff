//! Four quantized stages from one clocked CV ramp.
//!
//! Runs the hosted plugin over a flat bus buffer the way an audio
//! callback would: a slow CV ramp on bus 1, a clock on bus 2, and the
//! four output stages on buses 13-16.
//!
//! Run with: cargo run --example four_stages

use cascade::machine::param;
use cascade::plugin::{CascadePlugin, FRAMES_PER_UNIT, ROUTING_PARAM_COUNT};

const CHANNELS: usize = 16;
const FRAMES: usize = 64;
const BLOCKS: usize = 8;

fn main() {
    let mut plugin = CascadePlugin::new();

    // Minor pentatonic, taps fanned out two steps apart.
    plugin.set_parameter(ROUTING_PARAM_COUNT + param::SCALE as usize, 11.0);
    plugin.set_parameter(ROUTING_PARAM_COUNT + param::DEPTH as usize, 2.0);

    println!("clock  in      A      B      C      D");

    let mut bus = vec![0.0f32; CHANNELS * FRAMES];
    for block in 0..BLOCKS {
        for i in 0..FRAMES {
            let step = (block * FRAMES + i) as f32;
            bus[i] = (step * 0.011).sin() * 2.0; // CV ramp, bus 1
            bus[FRAMES + i] = if i % 16 == 0 { 5.0 } else { 0.0 }; // clock, bus 2
        }

        plugin
            .step(&mut bus, FRAMES / FRAMES_PER_UNIT)
            .expect("default routing fits the buffer");

        // Print one line per clock pulse.
        for i in (0..FRAMES).step_by(16) {
            println!(
                "{:5} {:6.3} {:6.3} {:6.3} {:6.3} {:6.3}",
                block * FRAMES + i,
                bus[i],
                bus[12 * FRAMES + i],
                bus[13 * FRAMES + i],
                bus[14 * FRAMES + i],
                bus[15 * FRAMES + i],
            );
        }
    }
}
