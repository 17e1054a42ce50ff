//! # Cascade: Clocked Analog-Shift-Register Quantizer
//!
//! `cascade` is a Rust library implementing a classic modular
//! synthesis voice: an analog shift register (ASR) that captures a
//! control voltage on every clock edge and plays it back through four
//! output stages at staggered depths, each quantized to one of 133
//! musical scales.
//!
//! ## Architecture
//!
//! The library is organized in three layers:
//!
//! - **Signal & port conventions** - signal kinds, port and parameter
//!   descriptors, and the type-erased [`port::SynthModule`] trait
//! - **DSP components** - the shift register, scale library and
//!   quantizer, bytebeat bank, and integer-sequence stepper
//! - **Machine & host adapter** - [`machine::AsrMachine`] composes the
//!   components into one per-sample voice; [`plugin::CascadePlugin`]
//!   adapts it to a host's parameter table and bus routing
//!
//! ## Quick Start
//!
//! ```rust
//! use cascade::machine::{param, AsrMachine, PORT_A, PORT_CLOCK, PORT_CV};
//! use cascade::port::{PortValues, SynthModule};
//!
//! let mut machine = AsrMachine::new();
//! machine.set_value(param::SCALE, 1); // natural minor
//!
//! let mut inputs = PortValues::new();
//! let mut outputs = PortValues::new();
//!
//! machine.begin_block();
//! inputs.set(PORT_CV, 0.3);
//! inputs.set(PORT_CLOCK, 5.0); // rising edge captures the sample
//! machine.tick(&inputs, &mut outputs);
//!
//! // Stage A plays the capture back on the scale grid.
//! let pitch = outputs.get(PORT_A).unwrap();
//! assert!((pitch * 12.0).fract().abs() < 1e-9);
//! ```
//!
//! ## Conventions
//!
//! Pitch CV runs at one unit per octave; clocks and gates read high
//! above [`port::EDGE_THRESHOLD`]. All processing is single-threaded
//! and allocation-free per sample, and every function is total over
//! its inputs: out-of-range selectors degrade to silence, empty
//! scales, or clamped indices instead of panicking.

pub mod asr;
pub mod bytebeat;
pub mod intseq;
pub mod machine;
pub mod plugin;
pub mod port;
pub mod quantizer;
pub mod scales;

/// Prelude module for convenient imports
pub mod prelude {
    // Signal conventions and the module interface
    pub use crate::port::{
        ParamDef, ParamId, ParamRange, PortDef, PortId, PortSpec, PortValues, SignalKind,
        SynthModule, EDGE_THRESHOLD,
    };

    // DSP components
    pub use crate::asr::ShiftRegister;
    pub use crate::bytebeat::{ByteBeat, ByteBeatCvDest};
    pub use crate::intseq::{IntSeq, IntSeqCvDest, Traversal};
    pub use crate::quantizer::quantize;
    pub use crate::scales::{ScaleIntervals, StandardScale};

    // The machine and its host adapter
    pub use crate::machine::{AsrMachine, Source};
    pub use crate::plugin::{
        memory_requirements, AtomicF64, CascadePlugin, MemoryRequirements, PluginCategory,
        PluginError, PluginInfo, PluginParameter, Preset,
    };
}

// Re-export key types at crate root for convenience
pub use prelude::*;
