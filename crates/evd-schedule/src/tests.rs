//! Unit tests for evd-schedule.

use evd_core::{SimTime, VehicleId};

use crate::{EventQueue, ProcessId};

fn at(minutes: f64) -> SimTime {
    SimTime::from_minutes(minutes)
}

fn car(i: u32) -> ProcessId {
    ProcessId::Vehicle(VehicleId(i))
}

fn ctrl(i: u32) -> ProcessId {
    ProcessId::Controller(VehicleId(i))
}

// ── EventQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event_queue {
    use super::*;

    #[test]
    fn empty_queue() {
        let mut q = EventQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert_eq!(q.next_time(), None);
        assert!(q.pop_next().is_none());
    }

    #[test]
    fn pops_in_time_order() {
        let mut q = EventQueue::new();
        q.push(at(505.75), car(0));
        q.push(at(480.0), car(1));
        q.push(at(12.5), car(2));
        assert_eq!(q.next_time(), Some(at(12.5)));

        let order: Vec<SimTime> = std::iter::from_fn(|| q.pop_next().map(|(t, _)| t)).collect();
        assert_eq!(order, vec![at(12.5), at(480.0), at(505.75)]);
    }

    #[test]
    fn same_instant_is_fifo() {
        let mut q = EventQueue::new();
        q.push(at(60.0), car(3));
        q.push(at(60.0), ctrl(1));
        q.push(at(60.0), car(0));
        assert_eq!(q.instant_count(), 1);
        assert_eq!(q.len(), 3);

        let (t, procs) = q.pop_next().unwrap();
        assert_eq!(t, at(60.0));
        assert_eq!(procs, vec![car(3), ctrl(1), car(0)]);
        assert!(q.is_empty());
    }

    #[test]
    fn push_at_drained_instant_runs_after() {
        let mut q = EventQueue::new();
        q.push(at(10.0), car(0));
        q.push(at(20.0), car(1));
        let (t, _) = q.pop_next().unwrap();
        // A process made ready while handling t=10 lands in a fresh batch at
        // the same instant, still ahead of t=20.
        q.push(t, ctrl(0));
        assert_eq!(q.pop_next(), Some((at(10.0), vec![ctrl(0)])));
        assert_eq!(q.pop_next(), Some((at(20.0), vec![car(1)])));
    }

    #[test]
    fn len_tracks_entries() {
        let mut q = EventQueue::new();
        q.push(at(1.0), car(0));
        q.push(at(1.0), car(1));
        q.push(at(2.0), car(2));
        assert_eq!(q.len(), 3);
        assert_eq!(q.instant_count(), 2);
        q.pop_next();
        assert_eq!(q.len(), 1);
    }
}

// ── ProcessId ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod process_id {
    use super::*;

    #[test]
    fn vehicle_of_both_kinds() {
        assert_eq!(car(4).vehicle(), VehicleId(4));
        assert_eq!(ctrl(4).vehicle(), VehicleId(4));
        assert_ne!(car(4), ctrl(4));
    }

    #[test]
    fn display() {
        assert_eq!(car(2).to_string(), "vehicle/2");
        assert_eq!(ctrl(9).to_string(), "controller/9");
    }
}
