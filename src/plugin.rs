//! Host plugin adapter.
//!
//! Bridges a host runtime to the machine: parameter descriptors and
//! lock-free parameter storage, channel routing over a flat
//! interleaved-by-channel bus array, the per-block step entry point,
//! and the pre-construction memory query. The host owns parameter
//! persistence; presets here are plain snapshots of the parameter
//! table, nothing of the runtime state is ever serialized.

use crate::machine::{self, AsrMachine};
use crate::port::{ParamRange, PortValues, SynthModule};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Host frame counts arrive in units of this many samples.
pub const FRAMES_PER_UNIT: usize = 4;

/// Highest 1-based bus index a routing parameter may select.
pub const MAX_BUS: i32 = 28;

/// Routing parameter ids (the leading entries of the plugin's
/// parameter table; machine parameters follow, offset by
/// [`ROUTING_PARAM_COUNT`]).
pub mod bus {
    pub const CV_IN: usize = 0;
    pub const CLOCK_IN: usize = 1;
    pub const OUT_A: usize = 2;
    pub const OUT_B: usize = 3;
    pub const OUT_C: usize = 4;
    pub const OUT_D: usize = 5;
}

/// Number of routing parameters ahead of the machine's table.
pub const ROUTING_PARAM_COUNT: usize = 6;

/// Total plugin parameter count.
pub const PARAM_COUNT: usize = ROUTING_PARAM_COUNT + machine::param::COUNT;

/// Atomic f64 for lock-free host-to-audio parameter hand-off.
///
/// Backed by an `AtomicU64` of the float's bits; relaxed ordering is
/// enough for single-writer parameter traffic.
#[derive(Debug, Default)]
pub struct AtomicF64(AtomicU64);

impl AtomicF64 {
    pub fn new(value: f64) -> Self {
        Self(AtomicU64::new(value.to_bits()))
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    pub fn set(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

/// Host-facing parameter descriptor.
#[derive(Debug, Clone)]
pub struct PluginParameter {
    pub id: u32,
    pub name: String,
    pub short_name: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub unit: String,
    /// Number of discrete steps (0 = continuous).
    pub steps: u32,
    /// Mapping between normalized automation and the value space.
    pub range: ParamRange,
}

impl PluginParameter {
    pub fn new(id: u32, name: &str, min: f64, max: f64, default: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            short_name: name.chars().take(8).collect(),
            min,
            max,
            default,
            unit: String::new(),
            steps: 0,
            range: ParamRange::Linear { min, max },
        }
    }

    /// Integer-stepped parameter covering `[min, max]`.
    pub fn stepped(id: u32, name: &str, min: i32, max: i32, default: i32) -> Self {
        let mut param = Self::new(id, name, f64::from(min), f64::from(max), f64::from(default));
        param.steps = (max - min) as u32;
        param
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = unit.to_string();
        self
    }

    pub fn with_range(mut self, range: ParamRange) -> Self {
        self.range = range;
        self
    }

    /// Normalized automation position for a value.
    pub fn normalize(&self, value: f64) -> f64 {
        self.range.normalize(value)
    }

    /// Value for a normalized automation position, snapped to the
    /// step grid when the parameter is discrete.
    pub fn denormalize(&self, normalized: f64) -> f64 {
        let value = self.range.apply(normalized);
        if self.steps == 0 {
            return value;
        }
        let step_size = (self.max - self.min) / f64::from(self.steps);
        self.min + ((value - self.min) / step_size).round() * step_size
    }
}

/// Plugin category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginCategory {
    Effect,
    Instrument,
    Generator,
    Other,
}

/// Plugin metadata.
#[derive(Debug, Clone)]
pub struct PluginInfo {
    pub id: String,
    pub name: String,
    pub vendor: String,
    pub version: String,
    pub category: PluginCategory,
    pub is_synth: bool,
}

impl PluginInfo {
    /// Metadata for a CV generator (audio inputs optional).
    pub fn generator(id: &str, name: &str, vendor: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            vendor: vendor.to_string(),
            version: "1.0.0".to_string(),
            category: PluginCategory::Generator,
            is_synth: false,
        }
    }
}

/// Fixed memory footprint reported to the host before construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryRequirements {
    /// The adapter itself (descriptors, atomics, snapshot).
    pub static_bytes: usize,
    /// The per-instance processing state.
    pub state_bytes: usize,
}

/// Report the fixed memory requirements of one plugin instance.
pub fn memory_requirements() -> MemoryRequirements {
    MemoryRequirements {
        static_bytes: std::mem::size_of::<CascadePlugin>(),
        state_bytes: std::mem::size_of::<AsrMachine>(),
    }
}

/// Errors surfaced by the host adapter. The processing core itself
/// never fails; these cover host-side wiring mistakes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginError {
    /// A routing parameter points at a bus the buffer does not have.
    InvalidRouting {
        param: &'static str,
        channel: i32,
        channels: usize,
    },
    /// The bus buffer length is not a whole number of channels.
    BufferMismatch { len: usize, frames: usize },
}

impl std::fmt::Display for PluginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginError::InvalidRouting {
                param,
                channel,
                channels,
            } => write!(
                f,
                "{} routed to bus {} but the buffer carries {} channels",
                param, channel, channels
            ),
            PluginError::BufferMismatch { len, frames } => write!(
                f,
                "bus buffer of {} samples is not divisible by {} frames",
                len, frames
            ),
        }
    }
}

impl std::error::Error for PluginError {}

/// Parameter-table snapshot for host-side preset storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub values: Vec<i32>,
}

impl Preset {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The complete hosted instance: parameter table, routing, and the
/// machine.
pub struct CascadePlugin {
    info: PluginInfo,
    parameters: Vec<PluginParameter>,
    values: Vec<Arc<AtomicF64>>,
    snapshot: Vec<i32>,
    machine: AsrMachine,
}

impl CascadePlugin {
    pub fn new() -> Self {
        let machine = AsrMachine::new();

        let mut parameters = vec![
            PluginParameter::stepped(bus::CV_IN as u32, "CV In", 1, MAX_BUS, 1),
            PluginParameter::stepped(bus::CLOCK_IN as u32, "Clock", 1, MAX_BUS, 2),
            PluginParameter::stepped(bus::OUT_A as u32, "Out A", 1, MAX_BUS, 13),
            PluginParameter::stepped(bus::OUT_B as u32, "Out B", 1, MAX_BUS, 14),
            PluginParameter::stepped(bus::OUT_C as u32, "Out C", 1, MAX_BUS, 15),
            PluginParameter::stepped(bus::OUT_D as u32, "Out D", 1, MAX_BUS, 16),
        ];
        for def in machine.params() {
            let id = ROUTING_PARAM_COUNT as u32 + def.id;
            let mut param = PluginParameter::stepped(id, def.name, def.min, def.max, def.default);
            if def.id == machine::param::GAIN {
                // Percent control with a musically even sweep.
                param = param.with_unit("%").with_range(ParamRange::Exponential {
                    min: f64::from(def.min),
                    max: f64::from(def.max),
                });
            }
            parameters.push(param);
        }

        let values: Vec<Arc<AtomicF64>> = parameters
            .iter()
            .map(|p| Arc::new(AtomicF64::new(p.default)))
            .collect();
        let snapshot = parameters.iter().map(|p| p.default as i32).collect();

        log::debug!(
            "cascade instance: {} parameters, {} byte state",
            parameters.len(),
            memory_requirements().state_bytes
        );

        Self {
            info: PluginInfo::generator("org.cascade.asr", "Cascade", "cascade"),
            parameters,
            values,
            snapshot,
            machine,
        }
    }

    pub fn info(&self) -> &PluginInfo {
        &self.info
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn parameter(&self, index: usize) -> Option<&PluginParameter> {
        self.parameters.get(index)
    }

    /// Lock-free handle for a parameter, for host controller threads.
    pub fn parameter_handle(&self, index: usize) -> Option<Arc<AtomicF64>> {
        self.values.get(index).cloned()
    }

    pub fn get_parameter(&self, index: usize) -> Option<f64> {
        self.values.get(index).map(|v| v.get())
    }

    /// Set a parameter from its plain value, clamped to its range.
    pub fn set_parameter(&self, index: usize, value: f64) {
        if let (Some(param), Some(slot)) = (self.parameters.get(index), self.values.get(index)) {
            slot.set(value.clamp(param.min, param.max));
        }
    }

    /// Set a parameter from a normalized 0–1 automation position.
    pub fn set_parameter_normalized(&self, index: usize, normalized: f64) {
        if let (Some(param), Some(slot)) = (self.parameters.get(index), self.values.get(index)) {
            slot.set(param.denormalize(normalized.clamp(0.0, 1.0)));
        }
    }

    /// Direct access to the hosted machine.
    pub fn machine(&self) -> &AsrMachine {
        &self.machine
    }

    /// Capture the current parameter table as a preset.
    pub fn save_preset(&self, name: &str) -> Preset {
        Preset {
            name: name.to_string(),
            values: self.values.iter().map(|v| v.get() as i32).collect(),
        }
    }

    /// Apply a preset to the parameter table. Extra values are
    /// ignored; missing ones keep their current setting.
    pub fn load_preset(&self, preset: &Preset) {
        for (index, &value) in preset.values.iter().enumerate().take(self.values.len()) {
            self.set_parameter(index, f64::from(value));
        }
    }

    fn refresh_snapshot(&mut self) {
        for (slot, value) in self.snapshot.iter_mut().zip(&self.values) {
            *slot = value.get().round() as i32;
        }
        for def in 0..machine::param::COUNT {
            self.machine
                .set_value(def as u32, self.snapshot[ROUTING_PARAM_COUNT + def]);
        }
    }

    /// Process one block over a flat interleaved-by-channel bus
    /// buffer.
    ///
    /// `frame_count_units` is the host's frame count in
    /// [`FRAMES_PER_UNIT`] units. On a routing error the buffer is
    /// left untouched.
    pub fn step(
        &mut self,
        bus_frames: &mut [f32],
        frame_count_units: usize,
    ) -> Result<(), PluginError> {
        let frames = frame_count_units * FRAMES_PER_UNIT;
        if frames == 0 {
            return Ok(());
        }
        if bus_frames.len() % frames != 0 {
            return Err(PluginError::BufferMismatch {
                len: bus_frames.len(),
                frames,
            });
        }
        let channels = bus_frames.len() / frames;

        self.refresh_snapshot();

        let cv = resolve_channel("CV In", self.snapshot[bus::CV_IN], channels)?;
        let clock = resolve_channel("Clock", self.snapshot[bus::CLOCK_IN], channels)?;
        let out_a = resolve_channel("Out A", self.snapshot[bus::OUT_A], channels)?;
        let out_b = resolve_channel("Out B", self.snapshot[bus::OUT_B], channels)?;
        let out_c = resolve_channel("Out C", self.snapshot[bus::OUT_C], channels)?;
        let out_d = resolve_channel("Out D", self.snapshot[bus::OUT_D], channels)?;

        self.machine.begin_block();

        let mut inputs = PortValues::new();
        let mut outputs = PortValues::new();
        for i in 0..frames {
            inputs.set(machine::PORT_CV, f64::from(bus_frames[cv * frames + i]));
            inputs.set(
                machine::PORT_CLOCK,
                f64::from(bus_frames[clock * frames + i]),
            );
            self.machine.tick(&inputs, &mut outputs);
            bus_frames[out_a * frames + i] = outputs.get_or(machine::PORT_A, 0.0) as f32;
            bus_frames[out_b * frames + i] = outputs.get_or(machine::PORT_B, 0.0) as f32;
            bus_frames[out_c * frames + i] = outputs.get_or(machine::PORT_C, 0.0) as f32;
            bus_frames[out_d * frames + i] = outputs.get_or(machine::PORT_D, 0.0) as f32;
        }
        Ok(())
    }
}

impl Default for CascadePlugin {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a 1-based routing value into a channel index, validated
/// against the buffer's channel count.
fn resolve_channel(
    param: &'static str,
    routed: i32,
    channels: usize,
) -> Result<usize, PluginError> {
    if routed >= 1 && (routed as usize) <= channels {
        Ok(routed as usize - 1)
    } else {
        log::warn!(
            "{} routed to bus {} outside the {}-channel buffer",
            param,
            routed,
            channels
        );
        Err(PluginError::InvalidRouting {
            param,
            channel: routed,
            channels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CHANNELS: usize = 16;
    const FRAMES: usize = 8;

    fn machine_param(index: u32) -> usize {
        ROUTING_PARAM_COUNT + index as usize
    }

    fn empty_bus() -> Vec<f32> {
        vec![0.0; CHANNELS * FRAMES]
    }

    #[test]
    fn step_quantizes_routed_cv_on_clock_edges() {
        let mut plugin = CascadePlugin::new();
        let mut bus = empty_bus();

        // CV on bus 1, clock on bus 2 (the defaults); one rising edge
        // at frame 2.
        for i in 0..FRAMES {
            bus[i] = 0.25;
        }
        bus[FRAMES + 2] = 5.0;

        plugin.step(&mut bus, FRAMES / FRAMES_PER_UNIT).unwrap();

        // Out A defaults to bus 13. Before the edge the register is
        // silent; after it, 0.25 units snap to 2 semitones.
        let out_a = &bus[12 * FRAMES..13 * FRAMES];
        assert_relative_eq!(f64::from(out_a[1]), 0.0);
        assert_relative_eq!(f64::from(out_a[2]), 2.0 / 12.0, epsilon = 1e-6);
        assert_relative_eq!(f64::from(out_a[7]), 2.0 / 12.0, epsilon = 1e-6);
    }

    #[test]
    fn all_four_outputs_are_written() {
        let mut plugin = CascadePlugin::new();
        let mut bus = empty_bus();
        for i in 0..FRAMES {
            bus[i] = 1.0; // one octave, in every scale
        }
        bus[FRAMES] = 5.0;

        plugin.step(&mut bus, FRAMES / FRAMES_PER_UNIT).unwrap();

        for out_bus in 12..16 {
            let last = bus[out_bus * FRAMES + FRAMES - 1];
            assert!(f64::from(last).is_finite());
        }
        // Depth 0: all four stages read the single captured sample.
        assert_relative_eq!(f64::from(bus[12 * FRAMES + 7]), 1.0, epsilon = 1e-6);
        assert_relative_eq!(f64::from(bus[15 * FRAMES + 7]), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn hold_parameter_freezes_the_register_through_the_adapter() {
        let mut plugin = CascadePlugin::new();
        plugin.set_parameter(machine_param(machine::param::HOLD), 1.0);

        let mut bus = empty_bus();
        for i in 0..FRAMES {
            bus[i] = 0.5;
        }
        bus[FRAMES + 3] = 5.0;

        plugin.step(&mut bus, FRAMES / FRAMES_PER_UNIT).unwrap();
        let out_a = &bus[12 * FRAMES..13 * FRAMES];
        for &sample in out_a {
            assert_relative_eq!(f64::from(sample), 0.0);
        }
    }

    #[test]
    fn routing_outside_the_buffer_is_an_error_and_leaves_it_untouched() {
        let mut plugin = CascadePlugin::new();
        plugin.set_parameter(bus::OUT_D, f64::from(MAX_BUS));

        let mut bus = empty_bus(); // 16 channels; bus 28 does not exist
        bus[0] = 0.7;
        let before = bus.clone();

        let err = plugin
            .step(&mut bus, FRAMES / FRAMES_PER_UNIT)
            .unwrap_err();
        assert!(matches!(err, PluginError::InvalidRouting { .. }));
        assert_eq!(bus, before);
    }

    #[test]
    fn misaligned_buffer_is_rejected() {
        let mut plugin = CascadePlugin::new();
        let mut bus = vec![0.0; CHANNELS * FRAMES + 3];
        let err = plugin
            .step(&mut bus, FRAMES / FRAMES_PER_UNIT)
            .unwrap_err();
        assert!(matches!(err, PluginError::BufferMismatch { .. }));
    }

    #[test]
    fn frame_units_expand_by_four() {
        let mut plugin = CascadePlugin::new();
        let mut bus = vec![0.0; CHANNELS * 4];
        bus[0..4].fill(1.0); // CV channel
        bus[4] = 5.0; // clock edge on the first frame

        plugin.step(&mut bus, 1).unwrap();

        // One unit is four frames: the whole Out A channel, including
        // its last frame, is written.
        assert_relative_eq!(f64::from(bus[12 * 4 + 3]), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn parameters_reach_the_machine_before_the_block() {
        let mut plugin = CascadePlugin::new();
        plugin.set_parameter(machine_param(machine::param::SCALE), 25.0);
        plugin.set_parameter(machine_param(machine::param::TRANSPOSE), -24.0);

        let mut bus = empty_bus();
        plugin.step(&mut bus, FRAMES / FRAMES_PER_UNIT).unwrap();

        assert_eq!(plugin.machine().value(machine::param::SCALE), 25);
        assert_eq!(plugin.machine().value(machine::param::TRANSPOSE), -24);
    }

    #[test]
    fn set_parameter_clamps_to_the_descriptor_range() {
        let plugin = CascadePlugin::new();
        let index = machine_param(machine::param::LENGTH);
        plugin.set_parameter(index, 1000.0);
        assert_relative_eq!(plugin.get_parameter(index).unwrap(), 64.0);
        plugin.set_parameter(index, -5.0);
        assert_relative_eq!(plugin.get_parameter(index).unwrap(), 4.0);
    }

    #[test]
    fn normalized_automation_snaps_to_integer_steps() {
        let plugin = CascadePlugin::new();
        let index = machine_param(machine::param::ROOT);
        plugin.set_parameter_normalized(index, 0.5);
        let value = plugin.get_parameter(index).unwrap();
        assert_relative_eq!(value, value.round());
        assert!((0.0..=11.0).contains(&value));
    }

    #[test]
    fn preset_roundtrips_through_json() {
        let plugin = CascadePlugin::new();
        plugin.set_parameter(machine_param(machine::param::SCALE), 42.0);
        plugin.set_parameter(machine_param(machine::param::GAIN), 150.0);

        let preset = plugin.save_preset("live set");
        let json = preset.to_json().unwrap();
        let restored = Preset::from_json(&json).unwrap();

        let other = CascadePlugin::new();
        other.load_preset(&restored);
        assert_relative_eq!(
            other
                .get_parameter(machine_param(machine::param::SCALE))
                .unwrap(),
            42.0
        );
        assert_relative_eq!(
            other
                .get_parameter(machine_param(machine::param::GAIN))
                .unwrap(),
            150.0
        );
    }

    #[test]
    fn memory_requirements_are_fixed_and_nonzero() {
        let req = memory_requirements();
        assert!(req.static_bytes > 0);
        assert!(req.state_bytes > 0);
        assert_eq!(req, memory_requirements());
    }

    #[test]
    fn parameter_table_covers_routing_and_machine() {
        let plugin = CascadePlugin::new();
        assert_eq!(plugin.parameter_count(), PARAM_COUNT);
        assert_eq!(plugin.parameter(bus::CV_IN).unwrap().name, "CV In");
        let gain = plugin
            .parameter(machine_param(machine::param::GAIN))
            .unwrap();
        assert_eq!(gain.unit, "%");
        assert!(matches!(gain.range, ParamRange::Exponential { .. }));
    }
}
