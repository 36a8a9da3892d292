// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel odds tables projection.
use log::debug;
use std::{thread, time::Instant};

use crate::{Card, OddsCalculator, OddsTable};

impl OddsCalculator {
    /// Parallel for each hole cards, calls the `f` closure with the flop table
    /// of each of the 1326 hole cards pairs.
    ///
    /// The closure takes an usize that is the task identifier (0..num_tasks),
    /// the hole cards, and their table.
    ///
    /// Panics if num_tasks is zero.
    pub fn par_for_each_hole<F>(&self, num_tasks: usize, f: F)
    where
        F: Fn(usize, [Card; 2], &OddsTable) + Send + Sync,
    {
        assert!(num_tasks > 0);

        let now = Instant::now();
        let mut holes = Vec::with_capacity(1326);
        for (idx, &c1) in self.universe().iter().enumerate() {
            for &c2 in &self.universe()[idx + 1..] {
                holes.push([c1, c2]);
            }
        }

        let holes_per_task = holes.len().div_ceil(num_tasks);

        thread::scope(|s| {
            for (task_id, holes) in holes.chunks(holes_per_task).enumerate() {
                let f = &f;
                s.spawn(move || {
                    for &hole in holes {
                        // Hole cards from the universe are always distinct.
                        if let Ok(table) = self.flop(hole) {
                            f(task_id, hole, &table);
                        }
                    }
                });
            }
        });

        debug!(
            "Projected {} flop tables with {num_tasks} tasks in {:.3}s",
            holes.len(),
            now.elapsed().as_secs_f64()
        );
    }
}
