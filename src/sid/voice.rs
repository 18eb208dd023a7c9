//! Single SID voice: phase accumulator, waveform generator, noise LFSR.

use super::envelope::Envelope;

const CONTROL_GATE: u8 = 0x01;
const CONTROL_SYNC: u8 = 0x02;
const CONTROL_RING: u8 = 0x04;
const CONTROL_TEST: u8 = 0x08;
const CONTROL_TRIANGLE: u8 = 0x10;
const CONTROL_SAWTOOTH: u8 = 0x20;
const CONTROL_PULSE: u8 = 0x40;
const CONTROL_NOISE: u8 = 0x80;

/// 23-bit noise LFSR initial state, per spec §3.
const NOISE_RESET: u32 = 0x7FFFF8;

pub struct Voice {
    pub freq: u16,
    pub pulse_width: u16,
    pub control: u8,
    pub envelope: Envelope,

    accumulator: u32,
    lfsr: u32,
    prev_accumulator_bit19: bool,
    prev_msb: bool,
    /// Set for one cycle after this voice's MSB rises 0->1; consumed by the
    /// *next* voice in the hard-sync chain on the following cycle (spec
    /// §4.6 hard sync is evaluated one voice-chain step removed, matching
    /// the circular 0<-2, 1<-0, 2<-1 dependency real SID hardware resolves
    /// combinationally but which a per-voice `clock()` call cannot).
    pub msb_edge: bool,
}

impl Voice {
    pub fn new() -> Self {
        Self {
            freq: 0,
            pulse_width: 0,
            control: 0,
            envelope: Envelope::new(),
            accumulator: 0,
            lfsr: NOISE_RESET,
            prev_accumulator_bit19: false,
            prev_msb: false,
            msb_edge: false,
        }
    }

    pub fn reset(&mut self) {
        self.freq = 0;
        self.pulse_width = 0;
        self.control = 0;
        self.envelope.reset();
        self.accumulator = 0;
        self.lfsr = NOISE_RESET;
        self.prev_accumulator_bit19 = false;
        self.prev_msb = false;
        self.msb_edge = false;
    }

    pub fn set_control(&mut self, data: u8) {
        let was_test = self.control & CONTROL_TEST != 0;
        self.control = data;
        self.envelope.set_gate(data & CONTROL_GATE != 0);

        // TEST=1 holds the accumulator at zero and forces the LFSR to shift
        // continuously; the falling edge (1->0) releases it.
        if was_test && data & CONTROL_TEST == 0 {
            self.accumulator = 0;
        }
    }

    pub fn test(&self) -> bool {
        self.control & CONTROL_TEST != 0
    }

    pub fn sync_enabled(&self) -> bool {
        self.control & CONTROL_SYNC != 0
    }

    fn ring_enabled(&self) -> bool {
        self.control & CONTROL_RING != 0
    }

    pub fn msb(&self) -> bool {
        self.accumulator & 0x0080_0000 != 0
    }

    /// Advance the phase accumulator and noise LFSR by one system cycle.
    /// `sync_source_msb_edge` is the hard-sync source voice's `msb_edge`
    /// flag from the previous cycle (spec §4.6).
    pub fn clock(&mut self, sync_source_msb_edge: bool) {
        if self.test() {
            self.accumulator = 0;
            // Noise LFSR is forced to all-ones bit pattern input while held;
            // the accumulator bit-19 edge that drives it never fires.
            self.prev_accumulator_bit19 = false;
        } else {
            if self.sync_enabled() && sync_source_msb_edge {
                self.accumulator = 0;
            } else {
                self.accumulator = self.accumulator.wrapping_add(self.freq as u32) & 0x00FF_FFFF;
            }

            let bit19 = self.accumulator & 0x0008_0000 != 0;
            if bit19 && !self.prev_accumulator_bit19 {
                let fb = (((self.lfsr >> 22) ^ (self.lfsr >> 17)) & 1) as u32;
                self.lfsr = ((self.lfsr << 1) | fb) & 0x007F_FFFF;
            }
            self.prev_accumulator_bit19 = bit19;
        }

        let msb = self.msb();
        self.msb_edge = msb && !self.prev_msb;
        self.prev_msb = msb;

        self.envelope.tick();
    }

    fn waveform_triangle(&self, ring_source_msb: bool) -> u16 {
        let top11 = ((self.accumulator >> 12) & 0x7FF) as u16;
        let msb = if self.ring_enabled() {
            self.msb() ^ ring_source_msb
        } else {
            self.msb()
        };
        let folded = if msb { !top11 & 0x7FF } else { top11 };
        folded << 1
    }

    fn waveform_sawtooth(&self) -> u16 {
        ((self.accumulator >> 12) & 0x0FFF) as u16
    }

    fn waveform_pulse(&self) -> u16 {
        let top12 = (self.accumulator >> 12) & 0x0FFF;
        if self.test() || top12 >= self.pulse_width as u32 {
            0x0FFF
        } else {
            0
        }
    }

    fn waveform_noise(&self) -> u16 {
        // Standard reSID bit mapping from the 23-bit LFSR into a 12-bit
        // waveform value.
        let l = self.lfsr;
        (((l >> 20) & 0x1) << 11
            | ((l >> 18) & 0x1) << 10
            | ((l >> 14) & 0x1) << 9
            | ((l >> 11) & 0x1) << 8
            | ((l >> 9) & 0x1) << 7
            | ((l >> 5) & 0x1) << 6
            | ((l >> 2) & 0x1) << 5
            | ((l >> 0) & 0x1) << 4) as u16
    }

    /// Combine whichever waveform bits are set (AND'ed, per real SID
    /// hardware — multiple simultaneous waveforms do not mix additively).
    pub fn output(&self, ring_source_msb: bool) -> u16 {
        let mut result: u16 = 0xFFFF;
        let mut any = false;

        if self.control & CONTROL_TRIANGLE != 0 {
            result &= self.waveform_triangle(ring_source_msb);
            any = true;
        }
        if self.control & CONTROL_SAWTOOTH != 0 {
            result &= self.waveform_sawtooth();
            any = true;
        }
        if self.control & CONTROL_PULSE != 0 {
            result &= self.waveform_pulse();
            any = true;
        }
        if self.control & CONTROL_NOISE != 0 {
            result &= self.waveform_noise();
            any = true;
        }

        if any { result } else { 0 }
    }

    pub fn accumulator(&self) -> u32 {
        self.accumulator
    }
}

impl Default for Voice {
    fn default() -> Self {
        Self::new()
    }
}
