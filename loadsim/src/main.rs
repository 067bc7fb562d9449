// -*- coding: utf-8 -*-

#![forbid(unsafe_code)]

mod sim;

use crate::sim::{Sample, Simulation};
use anyhow::{self as ah, Context as _};
use clap::Parser;
use sched_fixpt::mlfqs::{TIMER_FREQ, recent_cpu_centi};

/// Simulate the load average and priority decay of a
/// multi-level feedback queue scheduler.
#[derive(Parser, Debug)]
struct Opts {
    /// Number of seconds to simulate.
    #[arg(short, long, default_value_t = 60)]
    seconds: u64,

    /// Number of threads.
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Nice value of a thread. Repeat once per thread.
    /// Threads without a value get 0.
    #[arg(short, long, allow_negative_numbers = true)]
    nice: Vec<i32>,

    /// Timer ticks per second.
    #[arg(long, default_value_t = TIMER_FREQ)]
    timer_freq: i32,

    /// Randomize thread readiness every second, seeded with this value.
    #[arg(long)]
    seed: Option<u64>,

    /// Print only every n-th second.
    #[arg(long, default_value_t = 1)]
    every: u64,

    /// Verbose logging. Repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) -> ah::Result<()> {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ah::format_err!("{e}"))
        .context("Initialize logging")
}

/// Format a value scaled by 100 as a decimal with two digits.
fn centi(v: i32) -> String {
    let sign = if v < 0 { "-" } else { "" };
    let v = v.unsigned_abs();
    format!("{sign}{}.{:02}", v / 100, v % 100)
}

fn format_sample(sample: &Sample) -> String {
    let mut line = format!(
        "t={} load_avg={}",
        sample.second,
        centi(sample.load_avg.centi())
    );
    for t in &sample.threads {
        line.push_str(&format!(
            " {}:cpu={},pri={}",
            t.name,
            centi(recent_cpu_centi(t.recent_cpu)),
            t.priority
        ));
    }
    line
}

fn main() -> ah::Result<()> {
    let opts = Opts::parse();
    init_logging(opts.verbose)?;

    if opts.nice.len() > opts.threads {
        tracing::warn!(
            "{} nice values for {} threads. Ignoring the rest.",
            opts.nice.len(),
            opts.threads
        );
    }
    let nice: Vec<i32> = (0..opts.threads)
        .map(|i| opts.nice.get(i).copied().unwrap_or(0))
        .collect();

    let mut sim = Simulation::new(&nice, opts.timer_freq).context("Setup simulation")?;
    if let Some(seed) = opts.seed {
        sim = sim.with_random_workload(seed);
    }
    for t in sim.threads() {
        tracing::info!("{}: nice {}, priority {}", t.name, t.nice, t.priority);
    }

    let every = opts.every.max(1);
    for _ in 0..opts.seconds {
        let sample = sim.run_second();
        if sample.second % every == 0 {
            println!("{}", format_sample(&sample));
        }
    }
    tracing::info!(
        "{} ticks, final load_avg {}",
        sim.ticks(),
        sim.load_avg().get()
    );
    Ok(())
}


// vim: ts=4 sw=4 expandtab
