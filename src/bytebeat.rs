//! Bytebeat equation bank.
//!
//! Sixteen bit-manipulation formulas over a free-running integer
//! counter, each reduced to a byte and rescaled to `[-1, 1)`. The
//! formulas are chaotic by construction; their exact integer
//! arithmetic is the sound, so every operation here wraps rather than
//! saturates and none of them may be "simplified".

/// Number of equations in the bank.
pub const EQUATION_COUNT: usize = 16;

/// Display names for the equations, in bank order.
pub static EQUATION_NAMES: [&str; EQUATION_COUNT] = [
    "hope", "love", "life", "age", "clysm", "monk", "NERV", "Trurl",
    "Pirx", "Snaut", "Hari", "Kris", "Tichy", "Bregg", "Avon", "Orac",
];

/// CV modulation destinations a host may route to the generator.
/// Display metadata only; the equations themselves read nothing from
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteBeatCvDest {
    InputGain,
    Equation,
    P0,
    P1,
    P2,
}

impl ByteBeatCvDest {
    pub const COUNT: usize = 5;

    pub fn from_index(index: i32) -> Self {
        match index {
            1 => Self::Equation,
            2 => Self::P0,
            3 => Self::P1,
            4 => Self::P2,
            _ => Self::InputGain,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::InputGain => "igain",
            Self::Equation => "eqn",
            Self::P0 => "P0",
            Self::P1 => "P1",
            Self::P2 => "P2",
        }
    }
}

/// Evaluate one equation at counter position `t`.
///
/// Returns a sample in `[-1, 1)`; an equation index outside the bank
/// returns silence. The three operand slots are part of the contract
/// but unused by this bank, which bakes its constants into the
/// formulas.
pub fn eval(equation: i32, t: i32, _p0: i32, _p1: i32, _p2: i32) -> f64 {
    let byte = match equation {
        0 => t.wrapping_mul(t >> 8),
        1 => t ^ (t >> 3),
        2 => t.wrapping_mul((t >> 5) | (t >> 8)),
        3 => t.wrapping_mul(42) & (t >> 10),
        4 => (t.wrapping_mul(9) & (t >> 4)) | (t.wrapping_mul(5) & (t >> 7)),
        5 => (t.wrapping_mul(5) & (t >> 7)) | (t.wrapping_mul(3) & (t >> 10)),
        6 => t.wrapping_mul(7) & (t >> 11),
        7 => t.wrapping_mul(13) & (t >> 8),
        8 => t.wrapping_mul((t >> 6) | (t >> 8)),
        9 => t ^ (t >> 5),
        10 => t.wrapping_mul(11) & (t >> 9),
        11 => t.wrapping_mul(17) & (t >> 7),
        12 => t.wrapping_mul(19) & (t >> 6),
        13 => t.wrapping_mul(23) & (t >> 5),
        14 => t.wrapping_mul(29) & (t >> 4),
        15 => t.wrapping_mul(31) & (t >> 3),
        _ => return 0.0,
    };
    f64::from(byte & 0xFF) / 128.0 - 1.0
}

/// The free-running counter behind the equation bank.
///
/// Advances only while the bytebeat source is active; wraparound at
/// the integer boundary is part of normal operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteBeat {
    t: i32,
}

impl ByteBeat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current counter value and steps to the next one.
    pub fn advance(&mut self) -> i32 {
        let t = self.t;
        self.t = self.t.wrapping_add(1);
        t
    }

    pub fn position(&self) -> i32 {
        self.t
    }

    pub fn reset(&mut self) {
        self.t = 0;
    }
}
