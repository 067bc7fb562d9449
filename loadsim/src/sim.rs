// -*- coding: utf-8 -*-

use anyhow::{self as ah, format_err as err};
use rand::{Rng as _, SeedableRng as _, rngs::StdRng};
use sched_fixpt::{
    Fixpt,
    mlfqs::{LoadAvg, PRIORITY_INTERVAL, clamp_nice, decay_recent_cpu, priority},
};

/// Probability of a thread being ready during one second of random workload.
const READY_PROBABILITY: f64 = 0.75;

#[derive(Clone, Debug)]
pub struct SimThread {
    pub name: String,
    pub nice: i32,
    pub recent_cpu: Fixpt,
    pub priority: i32,
    pub ready: bool,
}

impl SimThread {
    fn new(index: usize, nice: i32) -> Self {
        let nice = clamp_nice(nice);
        Self {
            name: format!("t{index}"),
            nice,
            recent_cpu: Fixpt::ZERO,
            priority: priority(Fixpt::ZERO, nice),
            ready: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreadSample {
    pub name: String,
    pub recent_cpu: Fixpt,
    pub priority: i32,
}

/// State of the simulation at the end of one second.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub second: u64,
    pub load_avg: LoadAvg,
    pub threads: Vec<ThreadSample>,
}

pub struct Simulation {
    threads: Vec<SimThread>,
    load_avg: LoadAvg,
    timer_freq: i32,
    ticks: u64,
    workload: Option<StdRng>,
}

impl Simulation {
    pub fn new(nice: &[i32], timer_freq: i32) -> ah::Result<Self> {
        if nice.is_empty() {
            return Err(err!("At least one thread is required"));
        }
        if timer_freq <= 0 {
            return Err(err!("Invalid timer frequency: {timer_freq}"));
        }
        let threads: Vec<SimThread> = nice
            .iter()
            .enumerate()
            .map(|(i, &n)| SimThread::new(i, n))
            .collect();
        for (t, &n) in threads.iter().zip(nice) {
            if t.nice != n {
                tracing::warn!("{}: nice {} clamped to {}", t.name, n, t.nice);
            }
        }
        Ok(Self {
            threads,
            load_avg: LoadAvg::new(),
            timer_freq,
            ticks: 0,
            workload: None,
        })
    }

    /// Randomize thread readiness once per second.
    pub fn with_random_workload(mut self, seed: u64) -> Self {
        self.workload = Some(StdRng::seed_from_u64(seed));
        self
    }

    pub fn threads(&self) -> &[SimThread] {
        &self.threads
    }

    pub fn load_avg(&self) -> LoadAvg {
        self.load_avg
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Highest priority ready thread. Ties go to the lowest index.
    fn running(&self) -> Option<usize> {
        let mut running: Option<usize> = None;
        for (i, t) in self.threads.iter().enumerate() {
            if !t.ready {
                continue;
            }
            match running {
                Some(r) if self.threads[r].priority >= t.priority => (),
                _ => running = Some(i),
            }
        }
        running
    }

    fn reroll_workload(&mut self) {
        if let Some(rng) = self.workload.as_mut() {
            for t in &mut self.threads {
                t.ready = rng.random_bool(READY_PROBABILITY);
            }
        }
    }

    fn update_load(&mut self) {
        let ready = self.threads.iter().filter(|t| t.ready).count() as i32;
        self.load_avg.update(ready);
        let load_avg = self.load_avg.get();
        for t in &mut self.threads {
            t.recent_cpu = decay_recent_cpu(t.recent_cpu, load_avg, t.nice);
        }
        tracing::debug!(
            "tick {}: {} ready, load_avg {}",
            self.ticks,
            ready,
            load_avg
        );
    }

    fn update_priorities(&mut self) {
        for t in &mut self.threads {
            t.priority = priority(t.recent_cpu, t.nice);
        }
    }

    /// Advance by one timer tick. Returns the index of the thread that ran.
    pub fn tick(&mut self) -> Option<usize> {
        let running = self.running();
        if let Some(r) = running {
            let t = &mut self.threads[r];
            t.recent_cpu += 1;
            tracing::trace!("tick {}: {} running", self.ticks, t.name);
        }
        self.ticks += 1;

        if self.ticks % self.timer_freq as u64 == 0 {
            self.update_load();
            self.reroll_workload();
        }
        if self.ticks % PRIORITY_INTERVAL as u64 == 0 {
            self.update_priorities();
        }
        running
    }

    pub fn sample(&self) -> Sample {
        Sample {
            second: self.ticks / self.timer_freq as u64,
            load_avg: self.load_avg,
            threads: self
                .threads
                .iter()
                .map(|t| ThreadSample {
                    name: t.name.clone(),
                    recent_cpu: t.recent_cpu,
                    priority: t.priority,
                })
                .collect(),
        }
    }

    /// Run for one second and sample at its end.
    pub fn run_second(&mut self) -> Sample {
        for _ in 0..self.timer_freq {
            self.tick();
        }
        self.sample()
    }
}


// vim: ts=4 sw=4 expandtab
