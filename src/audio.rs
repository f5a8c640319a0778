//! Sound signals sent by the game loop
//!
//! Playback itself is outside the game; implementations must never fail the
//! caller.

use std::io::Write;

use tracing::{debug, trace};

/// Named one-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Eat,
    Crash,
}

impl SoundEffect {
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Eat => "eat",
            SoundEffect::Crash => "crash",
        }
    }
}

/// Fire-and-forget audio collaborator
pub trait AudioSignal {
    fn play(&mut self, effect: SoundEffect);
    fn pause_music(&mut self);
    fn resume_music(&mut self);
}

impl<T: AudioSignal + ?Sized> AudioSignal for Box<T> {
    fn play(&mut self, effect: SoundEffect) {
        (**self).play(effect)
    }

    fn pause_music(&mut self) {
        (**self).pause_music()
    }

    fn resume_music(&mut self) {
        (**self).resume_music()
    }
}

/// No sound at all
#[derive(Debug, Default)]
pub struct Muted;

impl AudioSignal for Muted {
    fn play(&mut self, effect: SoundEffect) {
        trace!(effect = effect.name(), "muted");
    }

    fn pause_music(&mut self) {}

    fn resume_music(&mut self) {}
}

/// Rings the terminal bell for sound effects. There is no music to pause.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> AudioSignal for TerminalBell<W> {
    fn play(&mut self, effect: SoundEffect) {
        let rung = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
        if let Err(e) = rung {
            debug!(effect = effect.name(), error = %e, "bell failed");
        }
    }

    fn pause_music(&mut self) {
        trace!("music paused");
    }

    fn resume_music(&mut self) {
        trace!("music resumed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_effect_names() {
        assert_eq!(SoundEffect::Eat.name(), "eat");
        assert_eq!(SoundEffect::Crash.name(), "crash");
    }

    #[test]
    fn test_bell_writes_bel() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.play(SoundEffect::Eat);
        bell.play(SoundEffect::Crash);
        assert_eq!(bell.out, b"\x07\x07");
    }

    #[test]
    fn test_bell_swallows_errors() {
        let mut bell = TerminalBell::new(Broken);
        bell.play(SoundEffect::Crash);
        bell.pause_music();
        bell.resume_music();
    }
}
