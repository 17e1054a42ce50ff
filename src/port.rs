//! Signal conventions and the per-sample module interface.
//!
//! This layer defines the signal classifications, port descriptors,
//! and the type-erased module trait that the host adapter drives. The
//! conventions follow hardware modular practice: pitch CV at one unit
//! per octave, clocks and gates read against a fixed edge threshold.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a port within a module.
pub type PortId = u32;

/// Unique identifier for a parameter within a module.
pub type ParamId = u32;

/// Signal level above which a gate, trigger, or clock reads as high.
pub const EDGE_THRESHOLD: f64 = 1.0;

/// Semantic signal classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    /// Audio-rate signal, nominally within ±1.
    Audio,

    /// Bipolar control voltage (LFO, modulation).
    CvBipolar,

    /// Unipolar control voltage (envelope, expression).
    CvUnipolar,

    /// Pitch CV, one unit per octave.
    VoltPerOctave,

    /// Binary state, high while an event is active.
    Gate,

    /// Short pulse marking an instantaneous event.
    Trigger,

    /// Regular trigger pulses at tempo.
    Clock,
}

impl SignalKind {
    /// Nominal signal range (min, max), a UI hint rather than a hard
    /// limit.
    pub fn nominal_range(&self) -> (f64, f64) {
        match self {
            SignalKind::Audio => (-1.0, 1.0),
            SignalKind::CvBipolar => (-5.0, 5.0),
            SignalKind::CvUnipolar => (0.0, 10.0),
            SignalKind::VoltPerOctave => (-5.0, 5.0),
            SignalKind::Gate => (0.0, 5.0),
            SignalKind::Trigger => (0.0, 5.0),
            SignalKind::Clock => (0.0, 5.0),
        }
    }

    /// Edge threshold for binary signal kinds.
    pub fn edge_threshold(&self) -> Option<f64> {
        match self {
            SignalKind::Gate | SignalKind::Trigger | SignalKind::Clock => Some(EDGE_THRESHOLD),
            _ => None,
        }
    }
}

/// Definition of a single port (input or output).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortDef {
    /// Unique identifier within the module.
    pub id: PortId,

    /// Human-readable name (e.g., "cv", "clock", "a").
    pub name: String,

    /// Signal type for validation and UI hints.
    pub kind: SignalKind,

    /// Value presented when nothing is connected.
    pub default: f64,
}

impl PortDef {
    pub fn new(id: PortId, name: impl Into<String>, kind: SignalKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            default: 0.0,
        }
    }

    pub fn with_default(mut self, default: f64) -> Self {
        self.default = default;
        self
    }
}

/// Specification of all ports for a module.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortSpec {
    pub inputs: Vec<PortDef>,
    pub outputs: Vec<PortDef>,
}

impl PortSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_by_name(&self, name: &str) -> Option<&PortDef> {
        self.inputs.iter().find(|p| p.name == name)
    }

    pub fn output_by_name(&self, name: &str) -> Option<&PortDef> {
        self.outputs.iter().find(|p| p.name == name)
    }

    pub fn input_by_id(&self, id: PortId) -> Option<&PortDef> {
        self.inputs.iter().find(|p| p.id == id)
    }

    pub fn output_by_id(&self, id: PortId) -> Option<&PortDef> {
        self.outputs.iter().find(|p| p.id == id)
    }
}

/// Runtime port values container.
#[derive(Debug, Clone, Default)]
pub struct PortValues {
    values: HashMap<PortId, f64>,
}

impl PortValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: PortId) -> Option<f64> {
        self.values.get(&id).copied()
    }

    pub fn get_or(&self, id: PortId, default: f64) -> f64 {
        self.values.get(&id).copied().unwrap_or(default)
    }

    pub fn set(&mut self, id: PortId, value: f64) {
        self.values.insert(id, value);
    }

    pub fn has(&self, id: PortId) -> bool {
        self.values.contains_key(&id)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Mapping from a normalized 0–1 control position to a concrete
/// value, for host automation and UI binding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum ParamRange {
    /// Straight-line mapping onto (min, max).
    Linear { min: f64, max: f64 },

    /// Exponential mapping, for gain- and frequency-like controls.
    Exponential { min: f64, max: f64 },
}

impl ParamRange {
    /// Map a normalized position to the parameter's value space.
    pub fn apply(&self, normalized: f64) -> f64 {
        let clamped = normalized.clamp(0.0, 1.0);
        match self {
            ParamRange::Linear { min, max } => min + clamped * (max - min),
            ParamRange::Exponential { min, max } => {
                if *min <= 0.0 {
                    clamped * max
                } else {
                    min * libm::pow(max / min, clamped)
                }
            }
        }
    }

    /// Map a value back to its normalized position.
    pub fn normalize(&self, value: f64) -> f64 {
        let normalized = match self {
            ParamRange::Linear { min, max } => {
                if max == min {
                    0.0
                } else {
                    (value - min) / (max - min)
                }
            }
            ParamRange::Exponential { min, max } => {
                if *min <= 0.0 || max == min {
                    if *max == 0.0 {
                        0.0
                    } else {
                        value / max
                    }
                } else {
                    libm::log(value / min) / libm::log(max / min)
                }
            }
        };
        normalized.clamp(0.0, 1.0)
    }
}

/// Integer parameter descriptor, the unit hosts exchange with a
/// module: every parameter value is an integer within `[min, max]`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParamDef {
    pub id: ParamId,
    pub name: &'static str,
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl ParamDef {
    pub const fn new(id: ParamId, name: &'static str, min: i32, max: i32, default: i32) -> Self {
        Self {
            id,
            name,
            min,
            max,
            default,
        }
    }

    /// Clamp a raw host value into the declared range.
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

/// Type-erased per-sample module interface.
pub trait SynthModule: Send {
    /// Returns the module's port specification.
    fn port_spec(&self) -> &PortSpec;

    /// Hook called once before each processing block, ahead of the
    /// first `tick` of the block.
    fn begin_block(&mut self) {}

    /// Process one sample given port values.
    fn tick(&mut self, inputs: &PortValues, outputs: &mut PortValues);

    /// Reset internal state to the just-constructed condition.
    fn reset(&mut self);

    /// Set sample rate. Modules that are sample-rate agnostic ignore
    /// this.
    fn set_sample_rate(&mut self, _sample_rate: f64) {}

    /// Integer parameter descriptors for host binding.
    fn params(&self) -> &[ParamDef] {
        &[]
    }

    /// Get a parameter value.
    fn get_param(&self, _id: ParamId) -> Option<i32> {
        None
    }

    /// Set a parameter value.
    fn set_param(&mut self, _id: ParamId, _value: i32) {}

    /// Module type identifier for registries and presets.
    fn type_id(&self) -> &'static str {
        "unknown"
    }
}
