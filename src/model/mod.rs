// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Domain models and core data structures.
//!
//! This module defines the state machine behind the application: the list of
//! entries, the live edit buffer for a single entry, and the outcome of a
//! shuffle. None of it knows about the terminal.

pub(crate) mod draft;
pub(crate) mod list;
pub(crate) mod shuffler;

/// Outcome of a shuffle.
///
/// `order` is a full permutation of the entries at the time of the shuffle,
/// the winner is always its first element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShuffleResult {
    winner: String,
    order: Vec<String>,
}

impl ShuffleResult {
    /// Builds a result from a shuffled order, `None` if the order is empty.
    pub(crate) fn from_order(order: Vec<String>) -> Option<Self> {
        let winner = order.first()?.clone();
        Some(Self { winner, order })
    }

    pub(crate) fn winner(&self) -> &str {
        &self.winner
    }

    pub(crate) fn order(&self) -> &[String] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_winner_is_first() {
        let result = ShuffleResult::from_order(vec!["b".into(), "a".into()]).unwrap();
        assert_eq!(result.winner(), "b");
        assert_eq!(result.order(), ["b", "a"]);
    }

    #[test]
    fn test_result_from_empty_order() {
        assert!(ShuffleResult::from_order(vec![]).is_none());
    }
}
