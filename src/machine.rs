//! The shift-register machine: source selection, clocked capture, and
//! quantized multi-tap playback.
//!
//! One module orchestrates the whole voice: it picks a raw sample
//! from the active source (CV input, bytebeat bank, or integer
//! sequence), captures it into the shift register on each rising
//! clock edge, then reads four taps at multiplied depths and
//! quantizes each against the shared scale settings. Every parameter
//! may change between any two samples; the machine only ever answers
//! with clamped, in-bounds behavior, never with a panic.

use crate::asr::ShiftRegister;
use crate::bytebeat::{self, ByteBeat};
use crate::intseq::{IntSeq, Traversal};
use crate::port::{ParamDef, PortDef, PortSpec, PortValues, SignalKind, SynthModule, EDGE_THRESHOLD};
use crate::quantizer::quantize;
use crate::scales;

/// CV/clock inputs.
pub const PORT_CV: u32 = 0;
pub const PORT_CLOCK: u32 = 1;

/// The four quantized output stages.
pub const PORT_A: u32 = 10;
pub const PORT_B: u32 = 11;
pub const PORT_C: u32 = 12;
pub const PORT_D: u32 = 13;

/// Parameter ids for [`AsrMachine`].
pub mod param {
    use crate::port::ParamId;

    pub const SCALE: ParamId = 0;
    pub const ROOT: ParamId = 1;
    pub const TRANSPOSE: ParamId = 2;
    pub const ROTATE: ParamId = 3;
    pub const DEPTH: ParamId = 4;
    pub const LENGTH: ParamId = 5;
    pub const HOLD: ParamId = 6;
    pub const GAIN: ParamId = 7;
    pub const SOURCE: ParamId = 8;
    pub const BYTEBEAT_EQUATION: ParamId = 9;
    pub const BYTEBEAT_P0: ParamId = 10;
    pub const BYTEBEAT_P1: ParamId = 11;
    pub const BYTEBEAT_P2: ParamId = 12;
    pub const BYTEBEAT_CV_DEST: ParamId = 13;
    pub const INTSEQ_SEQUENCE: ParamId = 14;
    pub const INTSEQ_MODULUS: ParamId = 15;
    pub const INTSEQ_START: ParamId = 16;
    pub const INTSEQ_LENGTH: ParamId = 17;
    pub const INTSEQ_TRAVERSAL: ParamId = 18;
    pub const INTSEQ_STRIDE: ParamId = 19;
    pub const INTSEQ_CV_DEST: ParamId = 20;

    pub const COUNT: usize = 21;
}

static PARAMS: [ParamDef; param::COUNT] = [
    ParamDef::new(param::SCALE, "Scale", 0, scales::SCALE_COUNT as i32 - 1, 0),
    ParamDef::new(param::ROOT, "Root", 0, 11, 0),
    ParamDef::new(param::TRANSPOSE, "Transpose", -24, 24, 0),
    ParamDef::new(param::ROTATE, "MaskRot", 0, 15, 0),
    ParamDef::new(param::DEPTH, "BufIdx", 0, crate::asr::CAPACITY as i32 - 1, 0),
    ParamDef::new(param::LENGTH, "BufLen", 4, crate::asr::CAPACITY as i32, 16),
    ParamDef::new(param::HOLD, "Hold", 0, 1, 0),
    ParamDef::new(param::GAIN, "Gain", 5, 200, 100),
    ParamDef::new(param::SOURCE, "CVSrc", 0, 2, 0),
    ParamDef::new(
        param::BYTEBEAT_EQUATION,
        "BB Eqn",
        0,
        bytebeat::EQUATION_COUNT as i32 - 1,
        0,
    ),
    ParamDef::new(param::BYTEBEAT_P0, "BB P0", 0, 255, 0),
    ParamDef::new(param::BYTEBEAT_P1, "BB P1", 0, 255, 0),
    ParamDef::new(param::BYTEBEAT_P2, "BB P2", 0, 255, 0),
    ParamDef::new(
        param::BYTEBEAT_CV_DEST,
        "BB CV1",
        0,
        bytebeat::ByteBeatCvDest::COUNT as i32 - 1,
        0,
    ),
    ParamDef::new(
        param::INTSEQ_SEQUENCE,
        "IntSeq",
        0,
        crate::intseq::SEQUENCE_COUNT as i32 - 1,
        0,
    ),
    ParamDef::new(param::INTSEQ_MODULUS, "IntSeqMod", 1, 32, 8),
    ParamDef::new(param::INTSEQ_START, "IntSeqStart", 0, 126, 0),
    ParamDef::new(param::INTSEQ_LENGTH, "IntSeqLen", 2, 128, 16),
    ParamDef::new(param::INTSEQ_TRAVERSAL, "IntSeqDir", 0, 1, 0),
    ParamDef::new(param::INTSEQ_STRIDE, "IntSeqStride", 1, 16, 1),
    ParamDef::new(
        param::INTSEQ_CV_DEST,
        "IntSeqCV1",
        0,
        crate::intseq::IntSeqCvDest::COUNT as i32 - 1,
        0,
    ),
];

/// Sample sources the machine can capture from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// External CV input scaled by the gain parameter.
    Cv,
    /// The bytebeat equation bank.
    ByteBeat,
    /// The integer-sequence stepper.
    IntSeq,
}

/// Display names for the sources, in selector order.
pub static SOURCE_NAMES: [&str; 3] = ["CV", "ByteBeat", "IntSeq"];

impl Source {
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => Self::ByteBeat,
            2 => Self::IntSeq,
            _ => Self::Cv,
        }
    }
}

/// Analog-shift-register quantizer voice.
pub struct AsrMachine {
    register: ShiftRegister,
    bytebeat: ByteBeat,
    intseq: IntSeq,
    last_clock: f64,
    values: [i32; param::COUNT],
    spec: PortSpec,
}

impl AsrMachine {
    pub fn new() -> Self {
        let mut values = [0; param::COUNT];
        for def in &PARAMS {
            values[def.id as usize] = def.default;
        }
        Self {
            register: ShiftRegister::new(),
            bytebeat: ByteBeat::new(),
            intseq: IntSeq::new(),
            last_clock: 0.0,
            values,
            spec: PortSpec {
                inputs: vec![
                    PortDef::new(PORT_CV, "cv", SignalKind::VoltPerOctave),
                    PortDef::new(PORT_CLOCK, "clock", SignalKind::Clock),
                ],
                outputs: vec![
                    PortDef::new(PORT_A, "a", SignalKind::VoltPerOctave),
                    PortDef::new(PORT_B, "b", SignalKind::VoltPerOctave),
                    PortDef::new(PORT_C, "c", SignalKind::VoltPerOctave),
                    PortDef::new(PORT_D, "d", SignalKind::VoltPerOctave),
                ],
            },
        }
    }

    /// Read one parameter value.
    pub fn value(&self, id: u32) -> i32 {
        self.values
            .get(id as usize)
            .copied()
            .unwrap_or_default()
    }

    /// Write one parameter value. Values are stored raw; anything
    /// range-sensitive is clamped at the point of use so mid-block
    /// changes stay memory-safe.
    pub fn set_value(&mut self, id: u32, value: i32) {
        if let Some(slot) = self.values.get_mut(id as usize) {
            *slot = value;
        }
    }

    /// The active sample source.
    pub fn source(&self) -> Source {
        Source::from_index(self.values[param::SOURCE as usize])
    }

    fn next_sample(&mut self, inputs: &PortValues) -> f64 {
        match self.source() {
            Source::Cv => {
                let gain = f64::from(self.values[param::GAIN as usize]) * 0.01;
                inputs.get_or(PORT_CV, 0.0) * gain
            }
            Source::ByteBeat => bytebeat::eval(
                self.values[param::BYTEBEAT_EQUATION as usize],
                self.bytebeat.advance(),
                self.values[param::BYTEBEAT_P0 as usize],
                self.values[param::BYTEBEAT_P1 as usize],
                self.values[param::BYTEBEAT_P2 as usize],
            ),
            Source::IntSeq => {
                let value = self.intseq.step(
                    self.values[param::INTSEQ_SEQUENCE as usize],
                    self.values[param::INTSEQ_START as usize],
                    self.values[param::INTSEQ_LENGTH as usize],
                    self.values[param::INTSEQ_STRIDE as usize],
                    Traversal::from_index(self.values[param::INTSEQ_TRAVERSAL as usize]),
                );
                let modulus = self.values[param::INTSEQ_MODULUS as usize].max(1);
                f64::from(value % modulus) / 12.0
            }
        }
    }
}

impl Default for AsrMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SynthModule for AsrMachine {
    fn port_spec(&self) -> &PortSpec {
        &self.spec
    }

    fn begin_block(&mut self) {
        // Sequence cursor lifecycle: anything but the live sequence
        // source resets it, as does a cursor left outside the window
        // after a length change.
        if self.source() == Source::IntSeq {
            self.intseq
                .clamp_to_window(self.values[param::INTSEQ_LENGTH as usize]);
        } else {
            self.intseq.reset();
        }
    }

    fn tick(&mut self, inputs: &PortValues, outputs: &mut PortValues) {
        let clock = inputs.get_or(PORT_CLOCK, 0.0);
        let rising = clock > EDGE_THRESHOLD && self.last_clock <= EDGE_THRESHOLD;
        self.last_clock = clock;

        self.register
            .set_len(self.values[param::LENGTH as usize].max(0) as usize);

        let sample = self.next_sample(inputs);

        let hold = self.values[param::HOLD as usize] != 0;
        if rising && !hold {
            self.register.write(sample);
        }

        let depth = self.values[param::DEPTH as usize].max(0) as usize;
        let scale = self.values[param::SCALE as usize];
        let root = self.values[param::ROOT as usize];
        let transpose = self.values[param::TRANSPOSE as usize];
        let rotate = self.values[param::ROTATE as usize];

        for (stage, port) in [(1, PORT_A), (2, PORT_B), (3, PORT_C), (4, PORT_D)] {
            let tapped = self.register.tap(stage, depth);
            outputs.set(port, quantize(tapped, scale, root, transpose, rotate));
        }
    }

    fn reset(&mut self) {
        self.register.reset();
        self.bytebeat.reset();
        self.intseq.reset();
        self.last_clock = 0.0;
    }

    fn params(&self) -> &[ParamDef] {
        &PARAMS
    }

    fn get_param(&self, id: u32) -> Option<i32> {
        if (id as usize) < param::COUNT {
            Some(self.values[id as usize])
        } else {
            None
        }
    }

    fn set_param(&mut self, id: u32, value: i32) {
        self.set_value(id, value);
    }

    fn type_id(&self) -> &'static str {
        "asr_machine"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tick_with(machine: &mut AsrMachine, cv: f64, clock: f64) -> [f64; 4] {
        let mut inputs = PortValues::new();
        inputs.set(PORT_CV, cv);
        inputs.set(PORT_CLOCK, clock);
        let mut outputs = PortValues::new();
        machine.tick(&inputs, &mut outputs);
        [
            outputs.get(PORT_A).unwrap(),
            outputs.get(PORT_B).unwrap(),
            outputs.get(PORT_C).unwrap(),
            outputs.get(PORT_D).unwrap(),
        ]
    }

    #[test]
    fn rising_edge_captures_exactly_one_sample() {
        let mut machine = AsrMachine::new();
        machine.begin_block();

        // No edge yet: every tap reads the zeroed register.
        let outs = tick_with(&mut machine, 0.25, 0.0);
        assert_relative_eq!(outs[0], 0.0);

        // Edge: the sample lands in the register and tap 1 at depth 0
        // reads it back, quantized (3 semitones snaps to 2 in Major).
        let outs = tick_with(&mut machine, 0.25, 5.0);
        assert_relative_eq!(outs[0], 2.0 / 12.0);

        // Clock still high: no second capture.
        let outs = tick_with(&mut machine, 0.9, 5.0);
        assert_relative_eq!(outs[0], 2.0 / 12.0);
    }

    #[test]
    fn edge_threshold_sits_at_one() {
        let mut machine = AsrMachine::new();
        machine.begin_block();

        // Exactly 1.0 does not cross the threshold.
        let outs = tick_with(&mut machine, 0.5, 1.0);
        assert_relative_eq!(outs[0], 0.0);

        // 1.0 -> 1.01 does; the captured F# snaps down to F.
        let outs = tick_with(&mut machine, 0.5, 1.01);
        assert_relative_eq!(outs[0], 5.0 / 12.0);
    }

    #[test]
    fn hold_suppresses_capture_but_not_playback() {
        let mut machine = AsrMachine::new();
        machine.begin_block();
        tick_with(&mut machine, 0.5, 5.0);
        tick_with(&mut machine, 0.5, 0.0);

        machine.set_value(param::HOLD, 1);
        let outs = tick_with(&mut machine, 0.25, 5.0);
        // The suppressed write leaves all four taps as they were
        // (still reading the earlier capture, F# snapped to F).
        for out in outs {
            assert_relative_eq!(out, 5.0 / 12.0);
        }

        machine.set_value(param::HOLD, 0);
        tick_with(&mut machine, 0.25, 0.0);
        let outs = tick_with(&mut machine, 0.25, 5.0);
        assert_relative_eq!(outs[0], 2.0 / 12.0);
    }

    #[test]
    fn stages_read_progressively_older_samples() {
        let mut machine = AsrMachine::new();
        machine.begin_block();
        machine.set_value(param::DEPTH, 1);

        // Capture an ascending octave staircase, one unit per step.
        for i in 0..8 {
            tick_with(&mut machine, f64::from(i), 5.0);
            tick_with(&mut machine, f64::from(i), 0.0);
        }
        let outs = tick_with(&mut machine, 0.0, 0.0);
        assert_relative_eq!(outs[0], 6.0);
        assert_relative_eq!(outs[1], 5.0);
        assert_relative_eq!(outs[2], 4.0);
        assert_relative_eq!(outs[3], 3.0);
    }

    #[test]
    fn gain_scales_the_cv_source() {
        let mut machine = AsrMachine::new();
        machine.begin_block();
        machine.set_value(param::GAIN, 200);
        let outs = tick_with(&mut machine, 0.5, 5.0);
        assert_relative_eq!(outs[0], 1.0);
    }

    #[test]
    fn bytebeat_counter_advances_only_while_selected() {
        let mut machine = AsrMachine::new();
        machine.begin_block();
        tick_with(&mut machine, 0.1, 0.0);
        tick_with(&mut machine, 0.1, 5.0);
        assert_eq!(machine.bytebeat.position(), 0);

        machine.set_value(param::SOURCE, 1);
        machine.begin_block();
        tick_with(&mut machine, 0.0, 0.0);
        tick_with(&mut machine, 0.0, 0.0);
        assert_eq!(machine.bytebeat.position(), 2);
    }

    #[test]
    fn sequence_source_is_quantized_through_the_register() {
        let mut machine = AsrMachine::new();
        machine.begin_block();
        machine.set_value(param::SOURCE, 2);
        machine.set_value(param::INTSEQ_SEQUENCE, 3); // identity ramp
        machine.set_value(param::INTSEQ_LENGTH, 10);
        machine.set_value(param::INTSEQ_MODULUS, 12);
        machine.begin_block();

        // Pulse the clock every other sample; the ramp is read as
        // 0, 2, 4, ... because the stepper also runs on the off
        // samples.
        let mut captured = Vec::new();
        for _ in 0..4 {
            let outs = tick_with(&mut machine, 0.0, 5.0);
            captured.push(outs[0]);
            tick_with(&mut machine, 0.0, 0.0);
        }
        assert_relative_eq!(captured[0], 0.0);
        assert_relative_eq!(captured[1], 2.0 / 12.0);
        assert_relative_eq!(captured[2], 4.0 / 12.0);
    }

    #[test]
    fn leaving_the_sequence_source_resets_its_cursor() {
        let mut machine = AsrMachine::new();
        machine.set_value(param::SOURCE, 2);
        machine.begin_block();
        for _ in 0..5 {
            tick_with(&mut machine, 0.0, 0.0);
        }
        assert_eq!(machine.intseq.position(), 5);

        machine.set_value(param::SOURCE, 0);
        machine.begin_block();
        assert_eq!(machine.intseq.position(), 0);
        assert_eq!(machine.intseq.direction(), 1);
    }

    #[test]
    fn shrinking_the_window_mid_run_resets_an_escaped_cursor() {
        let mut machine = AsrMachine::new();
        machine.set_value(param::SOURCE, 2);
        machine.begin_block();
        for _ in 0..12 {
            tick_with(&mut machine, 0.0, 0.0);
        }
        machine.set_value(param::INTSEQ_LENGTH, 4);
        machine.begin_block();
        assert_eq!(machine.intseq.position(), 0);
    }

    #[test]
    fn register_length_changes_mid_block_stay_safe() {
        let mut machine = AsrMachine::new();
        machine.begin_block();
        machine.set_value(param::LENGTH, 64);
        machine.set_value(param::DEPTH, 63);
        for i in 0..70 {
            let clock = if i % 2 == 0 { 5.0 } else { 0.0 };
            tick_with(&mut machine, 0.1 * f64::from(i % 7), clock);
            if i == 40 {
                machine.set_value(param::LENGTH, 4);
            }
        }
        // Reaching here without a panic is the property; outputs must
        // also still be finite.
        let outs = tick_with(&mut machine, 0.0, 0.0);
        for out in outs {
            assert!(out.is_finite());
        }
    }

    #[test]
    fn reset_returns_the_machine_to_silence() {
        let mut machine = AsrMachine::new();
        machine.begin_block();
        tick_with(&mut machine, 0.7, 5.0);
        machine.reset();
        let outs = tick_with(&mut machine, 0.0, 0.0);
        assert_relative_eq!(outs[0], 0.0);
    }

    #[test]
    fn parameter_table_matches_the_id_space() {
        let machine = AsrMachine::new();
        let defs = machine.params();
        assert_eq!(defs.len(), param::COUNT);
        for (i, def) in defs.iter().enumerate() {
            assert_eq!(def.id as usize, i);
            assert!(def.min <= def.default && def.default <= def.max);
        }
        assert_eq!(machine.get_param(param::LENGTH), Some(16));
        assert_eq!(machine.get_param(999), None);
        assert_eq!(SOURCE_NAMES, ["CV", "ByteBeat", "IntSeq"]);
    }
}
