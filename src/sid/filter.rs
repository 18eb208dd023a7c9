//! State-variable filter (spec §4.6).
//!
//! `hp = input - lp - (bp*q)/16`, `bp += (hp*w)/4096`, `lp += (bp*w)/4096`.
//! `w` is a monotonic approximation of the 11-bit cutoff; `q` derives from
//! `(15 - resonance) + 1`. Coefficients are fixed-point integer math in the
//! style of `sid_emulated.rs`'s `ExternalFilter` shift-based integrators
//! (textural grounding only — the topology itself is spec's, not the RC
//! external filter).

pub struct Filter {
    pub cutoff: u16,
    pub resonance: u8,
    /// Bit i = voice i routed through the filter.
    pub voice_route: u8,
    pub low_pass: bool,
    pub band_pass: bool,
    pub high_pass: bool,
    pub voice3_off: bool,
    pub volume: u8,

    lp: i32,
    bp: i32,
}

impl Filter {
    pub fn new() -> Self {
        Self {
            cutoff: 0,
            resonance: 0,
            voice_route: 0,
            low_pass: false,
            band_pass: false,
            high_pass: false,
            voice3_off: false,
            volume: 0,
            lp: 0,
            bp: 0,
        }
    }

    pub fn reset(&mut self) {
        self.cutoff = 0;
        self.resonance = 0;
        self.voice_route = 0;
        self.low_pass = false;
        self.band_pass = false;
        self.high_pass = false;
        self.voice3_off = false;
        self.volume = 0;
        self.lp = 0;
        self.bp = 0;
    }

    /// Monotonic cutoff-to-`w` mapping. The exact curve is an approximation
    /// (spec §9 Open Question); this one keeps `w` in a range that tracks
    /// the full 11-bit cutoff sweep from sub-audio to near-Nyquist.
    fn w(&self) -> i32 {
        1 + (self.cutoff as i32 * 6)
    }

    fn q(&self) -> i32 {
        (15 - self.resonance as i32) + 1
    }

    /// Process one sample's worth of filter input, returning the selected
    /// mix of {LP, BP, HP}. `input` is the sum of voices routed through the
    /// filter for this cycle (already clamped to i32 range).
    pub fn clock(&mut self, input: i32) -> i32 {
        let w = self.w();
        let q = self.q();

        let hp = input - self.lp - ((self.bp * q) >> 4);
        self.bp += (hp * w) >> 12;
        self.lp += (self.bp * w) >> 12;

        let mut out = 0i32;
        if self.low_pass {
            out += self.lp;
        }
        if self.band_pass {
            out += self.bp;
        }
        if self.high_pass {
            out += hp;
        }
        out
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::new()
    }
}
