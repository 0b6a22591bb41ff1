//! Test helpers for driving the generator with exact draws.

use rand::RngCore;
use std::collections::VecDeque;

/// An RNG that replays a fixed script of `f64` draws.
///
/// `rand` builds a uniform `f64` from the top 53 bits of `next_u64`, so each
/// scripted value is encoded back into those bits. Values must be multiples of
/// `2^-53` to be reproduced exactly.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    words: VecDeque<u64>,
}

impl ScriptedRng {
    pub fn new(draws: &[f64]) -> Self {
        let words = draws.iter().map(|&d| encode_unit(d)).collect();
        Self { words }
    }

    /// Number of scripted draws not consumed yet.
    pub fn remaining(&self) -> usize {
        self.words.len()
    }
}

fn encode_unit(draw: f64) -> u64 {
    assert!((0.0..1.0).contains(&draw), "scripted draw {draw} outside [0, 1)");
    ((draw * (1u64 << 53) as f64) as u64) << 11
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.words
            .pop_front()
            .expect("scripted RNG ran out of draws")
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
