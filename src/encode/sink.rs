use crate::animation::frame::AnimationSequence;
use crate::foundation::error::PinwheelResult;

/// Consumer of a finished animation.
pub trait AnimationEncoder {
    /// Persist `seq`. Either the whole animation is written or the call fails.
    fn encode(&mut self, seq: &AnimationSequence) -> PinwheelResult<()>;
}

/// In-memory encoder for tests and debugging.
///
/// Keeps the sequence it was handed and the GIF bytes it would have written.
#[derive(Debug, Default)]
pub struct InMemoryEncoder {
    sequence: Option<AnimationSequence>,
    bytes: Vec<u8>,
}

impl InMemoryEncoder {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The captured sequence, if `encode` ran.
    pub fn sequence(&self) -> Option<&AnimationSequence> {
        self.sequence.as_ref()
    }

    /// Encoded GIF bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AnimationEncoder for InMemoryEncoder {
    fn encode(&mut self, seq: &AnimationSequence) -> PinwheelResult<()> {
        self.bytes = crate::encode::gif::write_gif(Vec::new(), seq)?;
        self.sequence = Some(seq.clone());
        Ok(())
    }
}
