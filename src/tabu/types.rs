//! Moves and the tabu list.

use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reassignment of one customer between two warehouses.
///
/// Moves compare by value; the same triple is the same move for tabu
/// purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    /// Customer being reassigned.
    pub customer: usize,
    /// Warehouse the customer leaves.
    pub from: usize,
    /// Warehouse the customer joins.
    pub to: usize,
}

impl Move {
    /// Creates a move.
    pub fn new(customer: usize, from: usize, to: usize) -> Self {
        Self { customer, from, to }
    }
}

/// Fixed-capacity FIFO of recently applied moves.
///
/// Holds at most `tenure` moves; pushing onto a full list evicts the
/// oldest. Membership is a linear scan, which is cheap for the short
/// tenures tabu search uses.
///
/// # Examples
///
/// ```
/// use u_facility::tabu::{Move, TabuList};
///
/// let mut list = TabuList::new(2);
/// list.push(Move::new(0, 1, 2));
/// list.push(Move::new(1, 0, 2));
/// list.push(Move::new(2, 2, 0));
/// assert_eq!(list.len(), 2);
/// assert!(!list.contains(&Move::new(0, 1, 2)));
/// assert!(list.contains(&Move::new(2, 2, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct TabuList {
    moves: VecDeque<Move>,
    tenure: usize,
}

impl TabuList {
    /// Creates an empty list holding at most `tenure` moves.
    pub fn new(tenure: usize) -> Self {
        Self {
            moves: VecDeque::with_capacity(tenure + 1),
            tenure,
        }
    }

    /// Records `mv`, evicting the oldest entry if the list is full.
    pub fn push(&mut self, mv: Move) {
        if self.tenure == 0 {
            return;
        }
        self.moves.push_back(mv);
        while self.moves.len() > self.tenure {
            self.moves.pop_front();
        }
    }

    /// Returns `true` if `mv` is currently tabu.
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.iter().any(|m| m == mv)
    }

    /// Number of moves held.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if no move is tabu.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Maximum number of moves held.
    pub fn tenure(&self) -> usize {
        self.tenure
    }

    /// Moves from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// Forgets every move.
    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
