//! Scale Library
//!
//! Static interval tables backing the quantizer: sixteen standard
//! scales computed by a selector over a fixed enumeration, plus 117
//! exotic and microtonal scales stored as fixed-width tables.
//!
//! Interval offsets are expressed in semitones relative to the scale
//! root; microtonal scales use fractional offsets. Every scale starts
//! at 0. Exotic tables are padded with trailing zeros up to
//! [`SCALE_MAX_LEN`]; the padding takes part in the nearest-note
//! search (see [`crate::quantizer`]) and is kept that way for
//! compatibility with existing patches.

/// Number of algorithmically-defined scales.
pub const STANDARD_SCALE_COUNT: usize = 16;

/// Number of fixed-interval exotic scales.
pub const EXOTIC_SCALE_COUNT: usize = 117;

/// Total number of selectable scales.
pub const SCALE_COUNT: usize = STANDARD_SCALE_COUNT + EXOTIC_SCALE_COUNT;

/// Maximum number of interval entries in a scale table.
pub const SCALE_MAX_LEN: usize = 20;

/// An owned, ordered list of interval offsets for one scale.
///
/// Value type: copying it never aliases the underlying tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleIntervals {
    steps: [f32; SCALE_MAX_LEN],
    len: usize,
}

impl ScaleIntervals {
    /// The empty scale, returned for out-of-range selectors.
    pub const EMPTY: Self = Self {
        steps: [0.0; SCALE_MAX_LEN],
        len: 0,
    };

    /// Build from a slice of interval offsets (truncated to
    /// [`SCALE_MAX_LEN`] entries).
    pub fn from_steps(steps: &[f32]) -> Self {
        let mut intervals = Self::EMPTY;
        let len = steps.len().min(SCALE_MAX_LEN);
        intervals.steps[..len].copy_from_slice(&steps[..len]);
        intervals.len = len;
        intervals
    }

    /// Number of entries visible to the nearest-note search.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The interval offsets, including any zero padding an exotic
    /// table carries.
    pub fn steps(&self) -> &[f32] {
        &self.steps[..self.len]
    }
}

/// The algorithmically-defined scales, in selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardScale {
    Major,
    Minor,
    HarmonicMinor,
    MelodicMinor,
    Mixolydian,
    Dorian,
    Lydian,
    Phrygian,
    Aeolian,
    Locrian,
    MajorPentatonic,
    MinorPentatonic,
    WholeTone,
    OctatonicHalfWhole,
    OctatonicWholeHalf,
    Ionian,
}

impl StandardScale {
    /// Map a scale selector in `[0, 16)` to its variant.
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::Major),
            1 => Some(Self::Minor),
            2 => Some(Self::HarmonicMinor),
            3 => Some(Self::MelodicMinor),
            4 => Some(Self::Mixolydian),
            5 => Some(Self::Dorian),
            6 => Some(Self::Lydian),
            7 => Some(Self::Phrygian),
            8 => Some(Self::Aeolian),
            9 => Some(Self::Locrian),
            10 => Some(Self::MajorPentatonic),
            11 => Some(Self::MinorPentatonic),
            12 => Some(Self::WholeTone),
            13 => Some(Self::OctatonicHalfWhole),
            14 => Some(Self::OctatonicWholeHalf),
            15 => Some(Self::Ionian),
            _ => None,
        }
    }

    /// Returns the interval offsets for this scale.
    pub fn intervals(self) -> ScaleIntervals {
        let steps: &[f32] = match self {
            Self::Major => &[0.0, 2.0, 4.0, 5.0, 7.0, 9.0, 11.0, 12.0],
            Self::Minor => &[0.0, 2.0, 3.0, 5.0, 7.0, 8.0, 10.0, 12.0],
            Self::HarmonicMinor => &[0.0, 2.0, 3.0, 5.0, 7.0, 8.0, 11.0, 12.0],
            Self::MelodicMinor => &[0.0, 2.0, 3.0, 5.0, 7.0, 9.0, 11.0, 12.0],
            Self::Mixolydian => &[0.0, 2.0, 4.0, 5.0, 7.0, 9.0, 10.0, 12.0],
            Self::Dorian => &[0.0, 2.0, 3.0, 5.0, 7.0, 9.0, 10.0, 12.0],
            Self::Lydian => &[0.0, 2.0, 4.0, 6.0, 7.0, 9.0, 11.0, 12.0],
            Self::Phrygian => &[0.0, 1.0, 3.0, 5.0, 7.0, 8.0, 10.0, 12.0],
            Self::Aeolian => &[0.0, 2.0, 3.0, 5.0, 7.0, 8.0, 10.0, 12.0],
            Self::Locrian => &[0.0, 1.0, 3.0, 5.0, 6.0, 8.0, 10.0, 12.0],
            Self::MajorPentatonic => &[0.0, 2.0, 4.0, 7.0, 9.0],
            Self::MinorPentatonic => &[0.0, 3.0, 5.0, 7.0, 10.0],
            Self::WholeTone => &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0],
            Self::OctatonicHalfWhole => &[0.0, 1.0, 3.0, 4.0, 6.0, 7.0, 9.0, 10.0],
            Self::OctatonicWholeHalf => &[0.0, 2.0, 3.0, 5.0, 6.0, 8.0, 9.0, 11.0],
            Self::Ionian => &[0.0, 2.0, 4.0, 5.0, 7.0, 9.0, 11.0, 12.0],
        };
        ScaleIntervals::from_steps(steps)
    }
}

/// Resolve a scale selector to its interval list.
///
/// Selectors in `[0, 16)` hit the standard selector, `[16, 133)` the
/// exotic tables (reported at their full padded length), and anything
/// else resolves to the empty scale.
pub fn resolve(scale_index: i32) -> ScaleIntervals {
    if let Some(standard) = StandardScale::from_index(scale_index) {
        return standard.intervals();
    }
    let exotic = scale_index - STANDARD_SCALE_COUNT as i32;
    if (0..EXOTIC_SCALE_COUNT as i32).contains(&exotic) {
        return ScaleIntervals {
            steps: EXOTIC_SCALES[exotic as usize],
            len: SCALE_MAX_LEN,
        };
    }
    ScaleIntervals::EMPTY
}

/// Display name for a scale selector, if it is in range.
pub fn name(scale_index: i32) -> Option<&'static str> {
    if (0..SCALE_COUNT as i32).contains(&scale_index) {
        Some(SCALE_NAMES[scale_index as usize])
    } else {
        None
    }
}

const fn pad(steps: &[f32]) -> [f32; SCALE_MAX_LEN] {
    let mut out = [0.0; SCALE_MAX_LEN];
    let mut i = 0;
    while i < steps.len() {
        out[i] = steps[i];
        i += 1;
    }
    out
}

/// Display names for all scales, standard first.
pub static SCALE_NAMES: [&str; SCALE_COUNT] = [
    "Major", "Minor", "Harmonic Minor", "Melodic Minor",
    "Mixolydian", "Dorian", "Lydian", "Phrygian",
    "Aeolian", "Locrian", "Maj Pent", "Min Pent",
    "Whole Tone", "Octatonic HW", "Octatonic WH", "Ionian",
    "Blues Major", "Blues Minor", "Folk", "Japanese",
    "Gamelan", "Gypsy", "Arabian", "Flamenco",
    "Whole Tone (Exotic)", "Pythagorean", "1/4-EB", "1/4-E",
    "1/4-EA", "Bhairav", "Gunakri", "Marwa",
    "Shree", "Purvi", "Bilawal", "Yaman",
    "Kafi", "Bhimpalasree", "Darbari", "Rageshree",
    "Khamaj", "Mimal", "Parameshwari", "Rangeshwari",
    "Gangeshwari", "Kameshwari", "Pa_Kafi", "Natbhairav",
    "M_Kauns", "Bairagi", "B_Todi", "Chandradeep",
    "Kaushik_Todi", "Jogeshwari", "Tartini-Vallotti", "13/22-tET",
    "13/19-tET", "Magic145", "Quartaminorthirds", "Armodue",
    "Hirajoshi", "Scottish Bagpipes", "Thai Ranat", "Sevish 31-EDO",
    "11TET Machine", "13TET Father", "15TET Blackwood", "16TET Mavila",
    "16TET Mavila9", "17TET Superpyth", "22TET Orwell", "22TET Pajara",
    "22TET Pajara2", "22TET Porcupine", "26TET Flattone", "26TET Lemba",
    "46TET Sensi", "53TET Orwell", "72TET Prent", "Zeus Trivalent",
    "202TET Octone", "313TET Elfmadagasgar", "Marvel Glumma", "TOP Parapyth",
    "16ED", "15ED", "14ED", "13ED",
    "11ED", "10ED", "9ED", "8ED",
    "7ED", "6ED", "5ED", "16HD2",
    "15HD2", "14HD2", "13HD2", "12HD2",
    "11HD2", "10HD2", "9HD2", "8HD2",
    "7HD2", "6HD2", "5HD2", "32-16SD2",
    "30-15SD2", "28-14SD2", "26-13SD2", "24-12SD2",
    "22-11SD2", "20-10SD2", "18-9SD2", "16-8SD2",
    "14-7SD2", "12-6SD2", "10-5SD2", "8-4SD2",
    "BP Equal", "BP Just", "BP Lambda", "8-24HD3",
    "7-21HD3", "6-18HD3", "5-15HD3", "4-12HD3",
    "24-8HD3", "21-7HD3", "18-6HD3", "15-5HD3",
    "12-4HD3",
];

static EXOTIC_SCALES: [[f32; SCALE_MAX_LEN]; EXOTIC_SCALE_COUNT] = [
    // Blues Major
    pad(&[0.0, 3.0, 4.0, 7.0, 9.0, 10.0]),
    // Blues Minor
    pad(&[0.0, 3.0, 5.0, 6.0, 7.0, 10.0]),
    // Folk
    pad(&[0.0, 1.0, 3.0, 4.0, 5.0, 7.0, 8.0, 10.0]),
    // Japanese
    pad(&[0.0, 1.0, 5.0, 7.0, 8.0]),
    // Gamelan
    pad(&[0.0, 1.0, 3.0, 7.0, 8.0]),
    // Gypsy
    pad(&[0.0, 2.0, 3.0, 6.0, 7.0, 8.0, 11.0]),
    // Arabian
    pad(&[0.0, 1.0, 4.0, 5.0, 7.0, 8.0, 11.0]),
    // Flamenco
    pad(&[0.0, 1.0, 4.0, 5.0, 7.0, 8.0, 10.0]),
    // Whole Tone (Exotic)
    pad(&[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]),
    // Pythagorean
    pad(&[0.0, 0.898, 2.039, 2.938, 4.078, 4.977, 6.117, 7.023, 7.922, 9.062, 9.961, 11.102]),
    // 1/4-EB
    pad(&[0.0, 1.0, 2.0, 3.0, 3.5, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 10.5]),
    // 1/4-E
    pad(&[0.0, 1.0, 2.0, 3.0, 3.5, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0]),
    // 1/4-EA
    pad(&[0.0, 1.0, 2.0, 3.0, 3.5, 5.0, 6.0, 7.0, 8.0, 8.5, 10.0, 11.0]),
    // Bhairav
    pad(&[0.0, 0.898, 3.859, 4.977, 7.023, 7.922, 10.883]),
    // Gunakri
    pad(&[0.0, 1.117, 4.977, 7.023, 8.141]),
    // Marwa
    pad(&[0.0, 1.117, 3.859, 5.898, 8.844, 10.883]),
    // Shree
    pad(&[0.0, 0.898, 3.859, 5.898, 7.023, 7.922, 10.883]),
    // Purvi
    pad(&[0.0, 1.117, 3.859, 5.898, 7.023, 8.141, 10.883]),
    // Bilawal
    pad(&[0.0, 2.039, 3.859, 4.977, 7.023, 9.062, 10.883]),
    // Yaman
    pad(&[0.0, 2.039, 4.078, 6.117, 7.023, 9.062, 11.102]),
    // Kafi
    pad(&[0.0, 1.820, 2.938, 4.977, 7.023, 8.844, 9.961]),
    // Bhimpalasree
    pad(&[0.0, 2.039, 3.156, 4.977, 7.023, 9.062, 10.180]),
    // Darbari
    pad(&[0.0, 2.039, 2.938, 4.977, 7.023, 7.922, 9.961]),
    // Rageshree
    pad(&[0.0, 2.039, 3.859, 4.977, 7.023, 8.844, 9.961]),
    // Khamaj
    pad(&[0.0, 2.039, 3.859, 4.977, 7.023, 9.062, 9.961, 11.102]),
    // Mimal
    pad(&[0.0, 2.039, 2.938, 4.977, 7.023, 8.844, 9.961, 10.883]),
    // Parameshwari
    pad(&[0.0, 0.898, 2.938, 4.977, 8.844, 9.961]),
    // Rangeshwari
    pad(&[0.0, 2.039, 2.938, 4.977, 7.023, 10.883]),
    // Gangeshwari
    pad(&[0.0, 3.859, 4.977, 7.023, 7.922, 9.961]),
    // Kameshwari
    pad(&[0.0, 2.039, 5.898, 7.023, 8.844, 9.961]),
    // Pa_Kafi
    pad(&[0.0, 2.039, 2.938, 4.977, 7.023, 9.062, 9.961]),
    // Natbhairav
    pad(&[0.0, 2.039, 3.859, 4.977, 7.023, 7.922, 10.883]),
    // M_Kauns
    pad(&[0.0, 2.039, 4.078, 4.977, 7.922, 9.961]),
    // Bairagi
    pad(&[0.0, 0.898, 4.977, 7.023, 9.961]),
    // B_Todi
    pad(&[0.0, 0.898, 2.938, 7.023, 9.961]),
    // Chandradeep
    pad(&[0.0, 2.938, 4.977, 7.023, 9.961]),
    // Kaushik_Todi
    pad(&[0.0, 2.938, 4.977, 5.898, 7.922]),
    // Jogeshwari
    pad(&[0.0, 2.938, 3.859, 4.977, 8.844, 9.961]),
    // Tartini-Vallotti
    pad(&[0.0, 0.9375, 1.9609, 2.9766, 3.9219, 5.0234, 5.9219, 6.9766, 7.9609, 8.9375, 10.0, 10.8984]),
    // 13/22-tET
    pad(&[0.0, 1.0938, 2.1797, 3.2734, 3.8203, 4.9063, 6.0, 6.5469, 7.6328, 8.7266, 9.2734, 10.3672, 11.4531]),
    // 13/19-tET
    pad(&[0.0, 1.2656, 1.8984, 3.1563, 3.7891, 5.0547, 5.6875, 6.9453, 7.5781, 8.8438, 9.4766, 10.7344, 11.3672]),
    // Magic145
    pad(&[0.0, 1.4922, 2.0703, 2.6484, 3.2266, 3.8047, 4.3828, 5.8750, 6.4531, 7.0313, 7.6172, 8.1953, 9.6797, 10.2656, 10.8438, 11.4219]),
    // Quartaminorthirds
    pad(&[0.0, 0.7734, 1.5547, 2.3281, 3.1094, 3.8828, 4.6641, 5.4375, 6.2188, 6.9922, 7.7734, 8.5469, 9.3203, 10.1016, 10.8750, 11.6563]),
    // Armodue
    pad(&[0.0, 0.7734, 1.5469, 2.3203, 3.0938, 3.8672, 4.6484, 5.4219, 6.1953, 6.9688, 7.7422, 8.5156, 9.2891, 9.6797, 10.4531, 11.2266]),
    // Hirajoshi
    pad(&[0.0, 1.8516, 3.3672, 6.8281, 7.8984]),
    // Scottish Bagpipes
    pad(&[0.0, 1.9688, 3.4063, 4.9531, 7.0313, 8.5313, 10.0938]),
    // Thai Ranat
    pad(&[0.0, 1.6094, 3.4609, 5.2578, 6.8594, 8.6172, 10.2891]),
    // Sevish 31-EDO
    pad(&[0.0, 1.1641, 2.3203, 3.0938, 4.2578, 5.0313, 6.1953, 7.3516, 8.1328, 9.2891, 10.0625, 11.2266]),
    // 11TET Machine
    pad(&[0.0, 2.1797, 4.3672, 5.4531, 7.6328, 9.8203]),
    // 13TET Father
    pad(&[0.0, 1.8438, 3.6953, 4.6172, 6.4609, 8.3047, 9.2344, 11.0781]),
    // 15TET Blackwood
    pad(&[0.0, 1.6016, 2.3984, 4.0, 4.7969, 6.3984, 7.2031, 8.7969, 9.6016, 11.2031]),
    // 16TET Mavila
    pad(&[0.0, 1.5, 3.0, 5.25, 6.75, 8.25, 9.75]),
    // 16TET Mavila9
    pad(&[0.0, 0.75, 2.25, 3.75, 5.25, 6.0, 7.5, 9.0, 10.5]),
    // 17TET Superpyth
    pad(&[0.0, 0.7031, 1.4141, 2.8203, 3.5313, 4.9375, 5.6484, 6.3516, 7.7578, 8.4688, 9.8828, 10.5859]),
    // 22TET Orwell
    pad(&[0.0, 1.0938, 2.7266, 3.8203, 5.4531, 6.5469, 8.1797, 9.2734, 10.9063]),
    // 22TET Pajara
    pad(&[0.0, 1.0938, 2.1797, 3.8203, 4.9063, 6.0, 7.0938, 8.1797, 9.8203, 10.9063]),
    // 22TET Pajara2
    pad(&[0.0, 1.0938, 2.1797, 3.8203, 4.9063, 6.0, 7.0938, 8.7266, 9.8203, 10.9063]),
    // 22TET Porcupine
    pad(&[0.0, 1.6328, 3.2734, 4.9063, 7.0938, 8.7266, 10.3672]),
    // 26TET Flattone
    pad(&[0.0, 0.4609, 1.8438, 2.3047, 3.6953, 5.0781, 5.5391, 6.9219, 7.3828, 8.7656, 9.2266, 10.6172]),
    // 26TET Lemba
    pad(&[0.0, 1.3828, 2.3047, 3.6953, 4.6172, 6.0, 7.3828, 8.3047, 9.6875, 10.6172]),
    // 46TET Sensi
    pad(&[0.0, 1.3047, 2.6094, 3.9141, 4.4375, 5.7422, 7.0469, 8.3516, 8.8672, 10.1719, 11.4766]),
    // 53TET Orwell
    pad(&[0.0, 1.1328, 2.7188, 3.8516, 5.4375, 6.5625, 8.1484, 9.2813, 10.8672]),
    // 72TET Prent
    pad(&[0.0, 2.0, 2.6641, 3.8359, 4.3359, 5.0, 5.5, 7.0, 8.8359, 9.6641, 10.5, 10.8359]),
    // Zeus Trivalent
    pad(&[0.0, 1.5781, 3.8750, 5.4531, 7.0313, 9.3359, 10.9063]),
    // 202TET Octone
    pad(&[0.0, 1.1875, 3.5078, 3.8594, 6.1797, 7.0078, 9.3281, 9.6797]),
    // 313TET Elfmadagasgar
    pad(&[0.0, 2.0313, 2.4922, 4.5234, 4.9844, 7.0156, 7.4766, 9.5078, 9.9688]),
    // Marvel Glumma
    pad(&[0.0, 0.4922, 2.3281, 3.1719, 3.8359, 5.4922, 6.1641, 7.0078, 8.8359, 9.3281, 9.6797, 11.6563]),
    // TOP Parapyth
    pad(&[0.0, 0.5859, 2.0703, 2.6563, 4.1406, 4.7266, 5.5469, 7.0469, 7.6172, 9.1094, 9.6875, 11.1797]),
    // 16ED
    pad(&[0.0, 0.75, 1.5, 2.25, 3.0, 3.75, 4.5, 5.25, 6.0, 6.75, 7.5, 8.25, 9.0, 9.75, 10.5, 11.25]),
    // 15ED
    pad(&[0.0, 0.7969, 1.6016, 2.3984, 3.2031, 4.0, 4.7969, 5.6016, 6.3984, 7.2031, 8.0, 8.7969, 9.6016, 10.3984, 11.2031]),
    // 14ED
    pad(&[0.0, 0.8594, 1.7109, 2.5703, 3.4297, 4.2891, 5.1484, 6.0, 6.8594, 7.7188, 8.5781, 9.4375, 10.2969, 11.1563]),
    // 13ED
    pad(&[0.0, 0.9219, 1.8438, 2.7656, 3.6953, 4.6328, 5.6328, 6.5703, 7.4922, 8.4141, 9.3359, 10.2578, 11.1797]),
    // 11ED
    pad(&[0.0, 1.0938, 2.1797, 3.2734, 4.3672, 5.4531, 6.5469, 7.6328, 8.7266, 9.8203, 10.9063]),
    // 10ED
    pad(&[0.0, 1.2031, 2.3984, 3.6016, 4.7969, 6.0, 7.2031, 8.3984, 9.6016, 10.7969]),
    // 9ED
    pad(&[0.0, 1.3359, 2.6641, 4.0, 5.3359, 6.6641, 8.0, 9.3359, 10.6641]),
    // 8ED
    pad(&[0.0, 1.5, 3.0, 4.5, 6.0, 7.5, 9.0, 10.5]),
    // 7ED
    pad(&[0.0, 1.7109, 3.4297, 5.1484, 6.8594, 8.5781, 10.2969]),
    // 6ED
    pad(&[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]),
    // 5ED
    pad(&[0.0, 2.3984, 4.7969, 7.2031, 9.6016]),
    // 16HD2
    pad(&[0.0, 1.0469, 2.0391, 2.9766, 3.8594, 4.7109, 5.5156, 6.2813, 7.0234, 7.7266, 8.4063, 9.0625, 9.6875, 10.2969, 10.8906, 11.4531]),
    // 15HD2
    pad(&[0.0, 1.1172, 2.1641, 3.1563, 4.0938, 4.9766, 5.8203, 6.6328, 7.4141, 8.1641, 8.8828, 9.5703, 10.2266, 10.852, 11.4453]),
    // 14HD2
    pad(&[0.0, 1.1953, 2.3125, 3.3594, 4.3516, 5.2891, 6.1797, 7.0313, 7.8516, 8.6406, 9.3984, 10.125, 10.8203, 11.4844]),
    // 13HD2
    pad(&[0.0, 1.2813, 2.4766, 3.5938, 4.6406, 5.6328, 6.5703, 7.4609, 8.3125, 9.125, 9.9063, 10.6484, 11.3594]),
    // 12HD2
    pad(&[0.0, 1.3828, 2.6719, 3.8594, 5.0078, 6.0313, 6.9922, 7.9531, 8.8438, 9.6875, 10.4844, 11.2656]),
    // 11HD2
    pad(&[0.0, 1.5078, 2.8906, 4.1719, 5.3672, 6.4844, 7.5391, 8.5234, 9.4688, 10.3672, 11.2109]),
    // 10HD2
    pad(&[0.0, 1.6484, 3.1563, 4.5391, 5.8672, 7.0234, 8.0703, 9.1875, 10.1797, 11.1094]),
    // 9HD2
    pad(&[0.0, 1.8203, 3.4766, 5.0938, 6.6797, 8.2422, 9.7891, 11.3203, 12.0]),
    // 8HD2
    pad(&[0.0, 2.0391, 3.8594, 5.5156, 7.0234, 8.4063, 9.6875, 10.8906]),
    // 7HD2
    pad(&[0.0, 2.3125, 4.3516, 6.1797, 7.8516, 9.3984, 10.8203]),
    // 6HD2
    pad(&[0.0, 3.0313, 6.0313, 9.0625, 12.0, 15.0]),
    // 5HD2
    pad(&[0.0, 4.0, 8.0, 12.0, 16.0]),
    // 32-16SD2
    pad(&[0.0, 0.5469, 1.1172, 1.7031, 2.3125, 2.9375, 3.5938, 4.2734, 4.9766, 5.7188, 6.4844, 7.2891, 8.0234, 8.9297, 9.9609, 10.9531]),
    // 30-15SD2
    pad(&[0.0, 0.5859, 1.1953, 1.8203, 2.4766, 3.1563, 3.8594, 4.6016, 5.3672, 6.1797, 7.0313, 7.9063, 8.8438, 9.8359, 10.8828]),
    // 28-14SD2
    pad(&[0.0, 0.6328, 1.2813, 1.9609, 2.6719, 3.4063, 4.1719, 4.977, 5.8203, 6.6953, 7.6328, 8.6328, 9.6875, 10.8047, 12.0]),
    // 26-13SD2
    pad(&[0.0, 0.6797, 1.3828, 2.125, 2.8906, 3.6953, 4.5391, 5.4219, 6.3516, 7.3203, 8.3281, 9.375, 10.4609]),
    // 24-12SD2
    pad(&[0.0, 0.7344, 1.5078, 2.3125, 3.1563, 4.0469, 4.9766, 5.9531, 6.9688, 8.0234, 9.1172, 10.25]),
    // 22-11SD2
    pad(&[0.0, 0.8047, 1.6484, 2.5391, 3.4766, 4.4609, 5.4922, 6.5703, 7.6953, 8.8672, 10.0859]),
    // 20-10SD2
    pad(&[0.0, 0.8906, 1.8203, 2.8125, 3.8594, 4.9609, 6.1172, 7.3281, 8.5938, 9.9141]),
    // 18-9SD2
    pad(&[0.0, 0.9922, 2.0391, 3.1563, 4.3359, 5.5781, 6.8828, 8.25, 9.6797]),
    // 16-8SD2
    pad(&[0.0, 1.1172, 2.3125, 3.5938, 4.9609, 6.4141, 7.9531, 9.5781]),
    // 14-7SD2
    pad(&[0.0, 1.2813, 2.6719, 4.1719, 5.7891, 7.5234, 9.375]),
    // 12-6SD2
    pad(&[0.0, 1.5078, 3.1563, 4.9609, 6.9219, 9.0391]),
    // 10-5SD2
    pad(&[0.0, 1.8203, 3.8594, 6.1719, 8.8438]),
    // 8-4SD2
    pad(&[0.0, 2.3125, 4.9766, 8.1406]),
    // BP Equal
    pad(&[0.0, 0.9219, 1.8438, 2.7656, 3.6953, 4.6172, 5.5391, 6.4609, 7.3828, 8.3047, 9.2344, 10.1563, 11.0781]),
    // BP Just
    pad(&[0.0, 0.8438, 1.9063, 2.7422, 3.6719, 4.6484, 5.5781, 6.4219, 7.3516, 8.3281, 9.2578, 10.0938, 11.1563]),
    // BP Lambda
    pad(&[0.0, 1.9063, 2.7422, 3.6719, 5.5781, 6.4219, 8.3281, 9.2578, 11.1563]),
    // 8-24HD3
    pad(&[0.0, 1.2891, 2.4375, 3.4766, 4.4297, 5.3047, 6.1172, 6.8828, 7.6172, 8.3203, 9.0, 9.6641, 10.3125, 10.9453, 11.5625, 12.1563]),
    // 7-21HD3
    pad(&[0.0, 1.4609, 2.7422, 3.8984, 4.9375, 5.8672, 6.6953, 7.4297, 8.0781, 8.6484, 9.1484, 9.5859, 9.9688, 10.3047]),
    // 6-18HD3
    pad(&[0.0, 1.6875, 3.1406, 4.4297, 5.5703, 6.5703, 7.4375, 8.1797, 8.8047, 9.3203, 9.7344, 10.0547]),
    // 5-15HD3
    pad(&[0.0, 1.9922, 3.6719, 5.1328, 6.3828, 7.4297, 8.2813, 8.9453, 9.4297, 9.7422]),
    // 4-12HD3
    pad(&[0.0, 2.4375, 4.4297, 6.1172, 7.6172, 9.0, 10.3125, 11.5625]),
    // 24-8HD3
    pad(&[0.0, 0.4688, 0.9531, 1.4609, 1.9922, 2.5469, 3.125, 3.7266, 4.3516, 5.0, 5.6719, 6.3672, 7.0859, 7.8281, 8.5938, 9.3828]),
    // 21-7HD3
    pad(&[0.0, 0.5313, 1.0938, 1.6875, 2.3047, 2.9453, 3.6094, 4.2969, 5.0078, 5.7422, 6.5, 7.2813, 8.0859, 8.9141]),
    // 18-6HD3
    pad(&[0.0, 0.625, 1.2891, 1.9922, 2.7344, 3.5156, 4.3359, 5.1953, 6.0938, 7.0313, 8.0078, 9.0234]),
    // 15-5HD3
    pad(&[0.0, 0.75, 1.5625, 2.4375, 3.375, 4.375, 5.4375, 6.5625, 7.75, 9.0]),
    // 12-4HD3
    pad(&[0.0, 0.9531, 1.9922, 3.125, 4.3516, 5.6719, 7.0859, 8.5938]),];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_selector_covers_sixteen_scales() {
        for index in 0..STANDARD_SCALE_COUNT as i32 {
            let scale = StandardScale::from_index(index).unwrap();
            let intervals = scale.intervals();
            assert!(intervals.len() >= 5 && intervals.len() <= 8);
            assert_eq!(intervals.steps()[0], 0.0);
        }
        assert!(StandardScale::from_index(16).is_none());
        assert!(StandardScale::from_index(-1).is_none());
    }

    #[test]
    fn exotic_scales_resolve_at_padded_length() {
        for index in STANDARD_SCALE_COUNT as i32..SCALE_COUNT as i32 {
            let intervals = resolve(index);
            assert_eq!(intervals.len(), SCALE_MAX_LEN);
            assert_eq!(intervals.steps()[0], 0.0);
        }
    }

    #[test]
    fn out_of_range_selectors_resolve_empty() {
        assert!(resolve(-1).is_empty());
        assert!(resolve(SCALE_COUNT as i32).is_empty());
        assert!(resolve(i32::MAX).is_empty());
        assert_eq!(resolve(500).steps().len(), 0);
    }

    #[test]
    fn names_line_up_with_tables() {
        assert_eq!(name(0), Some("Major"));
        assert_eq!(name(15), Some("Ionian"));
        assert_eq!(name(16), Some("Blues Major"));
        assert_eq!(name(132), Some("12-4HD3"));
        assert_eq!(name(133), None);
        assert_eq!(name(-1), None);
    }

    #[test]
    fn major_scale_intervals() {
        let major = resolve(0);
        assert_eq!(major.steps(), &[0.0, 2.0, 4.0, 5.0, 7.0, 9.0, 11.0, 12.0]);
    }

    #[test]
    fn pentatonic_excludes_octave_entry() {
        let pent = resolve(10);
        assert_eq!(pent.len(), 5);
        assert_eq!(pent.steps(), &[0.0, 2.0, 4.0, 7.0, 9.0]);
    }

    #[test]
    fn from_steps_truncates_overlong_input() {
        let long = [1.0f32; 32];
        let intervals = ScaleIntervals::from_steps(&long);
        assert_eq!(intervals.len(), SCALE_MAX_LEN);
    }
}
