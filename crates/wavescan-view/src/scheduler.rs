//! Cooperative frame scheduling.
//!
//! While playing, exactly one frame request is outstanding. When the host
//! finishes painting it reports the ticket back and, if the chain is still
//! live, receives the next one. Canceling bumps a generation counter so any
//! ticket issued before the cancel is stale and never re-requests.

/// Permission to paint one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTicket {
    generation: u64,
    sequence: u64,
}

impl FrameTicket {
    /// Frames issued so far in this chain, starting at 0.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[derive(Debug, Default)]
pub struct FrameScheduler {
    generation: u64,
    outstanding: Option<FrameTicket>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a chain. Returns `None` when a request is already outstanding.
    pub fn request(&mut self) -> Option<FrameTicket> {
        if self.outstanding.is_some() {
            return None;
        }
        let ticket = FrameTicket {
            generation: self.generation,
            sequence: 0,
        };
        self.outstanding = Some(ticket);
        Some(ticket)
    }

    /// Report a painted frame. Returns the next ticket when the frame belonged
    /// to the live chain and `keep_going` is still true.
    pub fn complete(&mut self, ticket: FrameTicket, keep_going: bool) -> Option<FrameTicket> {
        if self.outstanding != Some(ticket) {
            tracing::trace!(sequence = ticket.sequence, "dropping stale frame ticket");
            return None;
        }
        if !keep_going {
            self.outstanding = None;
            return None;
        }
        let next = FrameTicket {
            generation: self.generation,
            sequence: ticket.sequence + 1,
        };
        self.outstanding = Some(next);
        Some(next)
    }

    /// Cancel the pending request; outstanding tickets become stale.
    pub fn cancel(&mut self) {
        if self.outstanding.take().is_some() {
            tracing::debug!(generation = self.generation, "frame chain canceled");
        }
        self.generation += 1;
    }

    pub fn is_pending(&self) -> bool {
        self.outstanding.is_some()
    }
}
