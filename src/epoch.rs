use std::cell::Cell;
use std::rc::Rc;

/// Shared render generation counter.
///
/// Each load/resize advances the epoch. Async work started for an older
/// generation holds a [`RenderTicket`] that reports itself stale afterwards.
#[derive(Debug, Clone, Default)]
pub struct RenderEpoch {
    current: Rc<Cell<u64>>,
}

impl RenderEpoch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u64 {
        self.current.get()
    }

    /// Start a new generation, invalidating every earlier ticket.
    pub fn advance(&self) -> RenderTicket {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        RenderTicket {
            epoch: self.clone(),
            generation: next,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderTicket {
    epoch: RenderEpoch,
    generation: u64,
}

impl RenderTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.epoch.current() == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_invalidates_older_tickets() {
        let epoch = RenderEpoch::new();
        let first = epoch.advance();
        assert!(first.is_current());
        let second = epoch.advance();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(second.generation(), 2);
    }
}
