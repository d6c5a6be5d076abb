//! Sticky accumulation of the shutoff/collapse event flags.

use crate::registers::Event;

/// Latched view of the `EVENT` register.
///
/// Each poll ORs the hardware flags into the latch, so an event raised between two
/// polls is never lost. The only way back to a clear latch is [`EventLatch::clear`],
/// which the driver calls from [`D7s::reset_events`](crate::D7s::reset_events).
/// Call it after handling an earthquake, otherwise stale flags leak into the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventLatch {
    bits: u8,
}

impl EventLatch {
    const SHUTOFF: u8 = 0b01;
    const COLLAPSE: u8 = 0b10;
    const MASK: u8 = Self::SHUTOFF | Self::COLLAPSE;

    /// Creates a cleared latch.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Merges a freshly read `EVENT` register into the latch.
    pub fn accumulate(&mut self, event: Event) {
        self.bits |= u8::from(event) & Self::MASK;
    }

    /// Drops every latched flag.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Returns `true` once a shutoff event has been latched.
    pub const fn shutoff(&self) -> bool {
        self.bits & Self::SHUTOFF != 0
    }

    /// Returns `true` once a collapse event has been latched.
    pub const fn collapse(&self) -> bool {
        self.bits & Self::COLLAPSE != 0
    }

    /// Returns `true` when no flag is latched.
    pub const fn is_clear(&self) -> bool {
        self.bits == 0
    }

    /// Raw 2-bit latch value: bit 0 shutoff, bit 1 collapse.
    pub const fn bits(&self) -> u8 {
        self.bits
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EventLatch {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "EventLatch {{ shutoff: {}, collapse: {} }}",
            self.shutoff(),
            self.collapse()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::EventLatch;
    use crate::registers::Event;

    #[test]
    fn accumulates_across_polls() {
        let mut latch = EventLatch::new();
        latch.accumulate(Event::from(0b01));
        assert!(latch.shutoff());
        assert!(!latch.collapse());

        latch.accumulate(Event::from(0b10));
        assert_eq!(latch.bits(), 0b11);

        // A quiet poll never removes bits.
        latch.accumulate(Event::from(0b00));
        assert!(latch.shutoff());
        assert!(latch.collapse());
    }

    #[test]
    fn ignores_bits_outside_event_field() {
        let mut latch = EventLatch::new();
        latch.accumulate(Event::from(0b1111_1100));
        assert!(latch.is_clear());
    }

    #[test]
    fn clear_returns_to_empty() {
        let mut latch = EventLatch::new();
        latch.accumulate(Event::from(0b11));
        latch.clear();
        assert!(latch.is_clear());
        assert_eq!(latch, EventLatch::default());
    }
}
