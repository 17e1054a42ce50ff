//! Engine Benchmarks
//!
//! Validates that the voice stays comfortably inside real-time audio
//! budgets. The time budget per block is `buffer_size / sample_rate`;
//! at 48 kHz a 128-frame block must finish within 2.67 ms, and this
//! engine is expected to use a small fraction of that.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cascade::machine::{param, AsrMachine, PORT_CLOCK, PORT_CV};
use cascade::plugin::{CascadePlugin, FRAMES_PER_UNIT};
use cascade::port::{PortValues, SynthModule};
use cascade::quantizer::quantize;

const BUFFER_SIZES: [usize; 4] = [64, 128, 256, 512];
const CHANNELS: usize = 16;

fn bench_quantizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantizer");
    group.throughput(Throughput::Elements(128));

    // One standard scale, one microtonal table, one long table.
    for scale in [0i32, 25, 90] {
        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, &scale| {
            b.iter(|| {
                let mut acc = 0.0;
                for i in 0..128 {
                    acc += quantize(black_box(f64::from(i) * 0.03 - 2.0), scale, 2, -12, 3);
                }
                acc
            })
        });
    }
    group.finish();
}

fn bench_machine_sources(c: &mut Criterion) {
    let mut group = c.benchmark_group("machine_tick");
    group.throughput(Throughput::Elements(256));

    for (name, source) in [("cv", 0), ("bytebeat", 1), ("intseq", 2)] {
        group.bench_function(name, |b| {
            let mut machine = AsrMachine::new();
            machine.set_value(param::SOURCE, source);
            machine.set_value(param::DEPTH, 3);
            let mut inputs = PortValues::new();
            let mut outputs = PortValues::new();

            b.iter(|| {
                machine.begin_block();
                for i in 0..256u32 {
                    inputs.set(PORT_CV, f64::from(i % 64) * 0.05);
                    inputs.set(PORT_CLOCK, if i % 8 == 0 { 5.0 } else { 0.0 });
                    machine.tick(&inputs, &mut outputs);
                }
                black_box(outputs.get(cascade::machine::PORT_D))
            })
        });
    }
    group.finish();
}

fn bench_plugin_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("plugin_step");

    for frames in BUFFER_SIZES {
        group.throughput(Throughput::Elements(frames as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(frames),
            &frames,
            |b, &frames| {
                let mut plugin = CascadePlugin::new();
                let mut bus = vec![0.0f32; CHANNELS * frames];
                for i in 0..frames {
                    bus[i] = (i as f32 * 0.01).sin();
                    bus[frames + i] = if i % 16 == 0 { 5.0 } else { 0.0 };
                }

                b.iter(|| {
                    plugin
                        .step(black_box(&mut bus), frames / FRAMES_PER_UNIT)
                        .unwrap();
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_quantizer,
    bench_machine_sources,
    bench_plugin_blocks
);
criterion_main!(benches);
