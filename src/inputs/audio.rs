/// Caller-supplied audio amplitude accessor.
///
/// The core consumes at most one precomputed amplitude sample per frame;
/// decoding and analysis happen outside. A missing source or a missing
/// sample is treated as silence downstream.
pub trait AudioSource {
    /// Amplitude sample in `[0, 1]` for `frame`, if one is available.
    fn amplitude(&self, frame: u64) -> Option<f32>;
}

/// One precomputed sample per frame, indexed directly.
impl AudioSource for [f32] {
    fn amplitude(&self, frame: u64) -> Option<f32> {
        usize::try_from(frame).ok().and_then(|i| self.get(i)).copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/inputs/audio.rs"]
mod tests;
