//! Multi-level feedback queue scheduler formulas (4.4BSD style).
//!
//! `load_avg` and `recent_cpu` are real numbers, tracked as [`Fixpt`].
//! Priorities and nice values are plain integers.

use crate::{Fixpt, fixpt};

pub const PRI_MIN: i32 = 0;
pub const PRI_MAX: i32 = 63;

pub const NICE_MIN: i32 = -20;
pub const NICE_MAX: i32 = 20;

/// Timer ticks per second.
pub const TIMER_FREQ: i32 = 100;

/// Ticks between two priority recalculations.
pub const PRIORITY_INTERVAL: i32 = 4;

/// Exponentially weighted moving average of the number of ready threads.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct LoadAvg {
    avg: Fixpt,
}

impl LoadAvg {
    pub const fn new() -> Self {
        Self { avg: Fixpt::ZERO }
    }

    /// Once per second: `avg = 59/60 * avg + 1/60 * ready`.
    pub const fn update(&mut self, ready: i32) {
        let old = fixpt!(59 / 60).mul(self.avg);
        let new = fixpt!(1 / 60).mul_int(ready);
        self.avg = old.add(new);
    }

    pub const fn get(&self) -> Fixpt {
        self.avg
    }

    /// 100 times the load average, rounded.
    pub const fn centi(&self) -> i32 {
        self.avg.mul_int(100).to_int_round()
    }
}

/// Once per second: `recent_cpu = (2*load_avg)/(2*load_avg + 1) * recent_cpu + nice`.
pub const fn decay_recent_cpu(recent_cpu: Fixpt, load_avg: Fixpt, nice: i32) -> Fixpt {
    let twice_load = load_avg.mul_int(2);
    let coeff = twice_load.div(twice_load.add_int(1));
    coeff.mul(recent_cpu).add_int(nice)
}

/// 100 times `recent_cpu`, rounded.
pub const fn recent_cpu_centi(recent_cpu: Fixpt) -> i32 {
    recent_cpu.mul_int(100).to_int_round()
}

/// `PRI_MAX - recent_cpu/4 - nice*2`, clamped to the valid priority range.
///
/// The subtraction is done in fixed point, only the result is truncated.
/// `nice` is clamped to `[NICE_MIN, NICE_MAX]` first.
pub const fn priority(recent_cpu: Fixpt, nice: i32) -> i32 {
    let nice = Fixpt::from_int(clamp_nice(nice)).mul_int(2);
    let pri = Fixpt::from_int(PRI_MAX)
        .sub(recent_cpu.div_int(4))
        .sub(nice)
        .to_int();
    clamp(pri, PRI_MIN, PRI_MAX)
}

pub const fn clamp_nice(nice: i32) -> i32 {
    clamp(nice, NICE_MIN, NICE_MAX)
}

const fn clamp(v: i32, min: i32, max: i32) -> i32 {
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}


// vim: ts=4 sw=4 expandtab
