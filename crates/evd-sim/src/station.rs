//! `ChargingStation` — the shared, capacity-bounded pool of public slots.
//!
//! Two ways in:
//!
//! - [`try_acquire`](ChargingStation::try_acquire) never waits; it returns
//!   `None` when every slot is taken.  This is what vehicles use.
//! - [`request`](ChargingStation::request) queues the caller FIFO when full.
//!   A later [`release`](ChargingStation::release) hands the freed slot
//!   straight to the oldest waiter.
//!
//! A [`SlotHandle`] is move-only, so releasing the same grant twice does not
//! type-check.  Releasing a handle this station does not consider held (one
//! issued by a different station) is a fatal protocol violation.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};

use evd_core::{TicketId, VehicleId};

use crate::{SimError, SimResult};

static NEXT_STATION_ID: AtomicU64 = AtomicU64::new(0);

/// Proof of holding one slot.  Give it back with [`ChargingStation::release`].
#[derive(Debug, PartialEq, Eq)]
pub struct SlotHandle {
    station: u64,
    ticket:  TicketId,
    holder:  VehicleId,
}

impl SlotHandle {
    pub fn ticket(&self) -> TicketId {
        self.ticket
    }

    pub fn holder(&self) -> VehicleId {
        self.holder
    }
}

/// Outcome of a blocking [`ChargingStation::request`].
#[derive(Debug)]
pub enum Acquire {
    Granted(SlotHandle),
    /// Queued behind `ahead` earlier requesters.
    Queued { ahead: usize },
}

/// A slot handed to a waiter when another holder released.
#[derive(Debug)]
pub struct Grant {
    pub holder: VehicleId,
    pub handle: SlotHandle,
}

pub struct ChargingStation {
    id:          u64,
    capacity:    usize,
    held:        HashMap<TicketId, VehicleId>,
    waiting:     VecDeque<VehicleId>,
    next_ticket: u64,
    peak_held:   usize,
}

impl ChargingStation {
    pub fn new(capacity: usize) -> Self {
        Self {
            id: NEXT_STATION_ID.fetch_add(1, Ordering::Relaxed),
            capacity,
            held: HashMap::with_capacity(capacity),
            waiting: VecDeque::new(),
            next_ticket: 0,
            peak_held: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently held.
    pub fn held(&self) -> usize {
        self.held.len()
    }

    pub fn available(&self) -> usize {
        self.capacity - self.held.len()
    }

    pub fn waiting(&self) -> usize {
        self.waiting.len()
    }

    /// Highest number of simultaneously held slots so far.
    pub fn peak_held(&self) -> usize {
        self.peak_held
    }

    /// Take a slot if one is free right now.
    pub fn try_acquire(&mut self, who: VehicleId) -> Option<SlotHandle> {
        if self.held.len() < self.capacity && self.waiting.is_empty() {
            Some(self.grant(who))
        } else {
            None
        }
    }

    /// Take a slot, or join the FIFO queue if none is free.
    pub fn request(&mut self, who: VehicleId) -> Acquire {
        match self.try_acquire(who) {
            Some(handle) => Acquire::Granted(handle),
            None => {
                let ahead = self.waiting.len();
                self.waiting.push_back(who);
                Acquire::Queued { ahead }
            }
        }
    }

    /// Give a slot back.  If anyone is queued, the oldest waiter receives the
    /// freed slot and is returned so the caller can resume it.
    pub fn release(&mut self, handle: SlotHandle) -> SimResult<Option<Grant>> {
        let ours = handle.station == self.id
            && self.held.get(&handle.ticket) == Some(&handle.holder);
        if !ours {
            return Err(SimError::SlotNotHeld { ticket: handle.ticket, holder: handle.holder });
        }
        self.held.remove(&handle.ticket);

        Ok(self.waiting.pop_front().map(|holder| Grant {
            holder,
            handle: self.grant(holder),
        }))
    }

    fn grant(&mut self, holder: VehicleId) -> SlotHandle {
        let ticket = TicketId(self.next_ticket);
        self.next_ticket += 1;
        self.held.insert(ticket, holder);
        debug_assert!(self.held.len() <= self.capacity);
        self.peak_held = self.peak_held.max(self.held.len());
        SlotHandle { station: self.id, ticket, holder }
    }
}
