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

//! Random ordering of entries.
//!
//! The shuffle is a Fisher-Yates shuffle provided by [`SliceRandom`], so every
//! one of the `n!` orderings is equally likely. A comparator returning a
//! random sign for each pair is deliberately not used here, it does not give a
//! uniform distribution and the standard library sort is allowed to panic
//! when handed a comparator that is not a total order.

use rand::{Rng, seq::SliceRandom};

/// Returns a random permutation of `items`.
///
/// The returned vector holds exactly the same elements as the input,
/// duplicates included. The input slice is left untouched.
pub(crate) fn shuffle<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut order = items.to_vec();
    order.shuffle(rng);
    order
}
