use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use clap::{Parser, ValueEnum};
use hdrhistogram::Histogram;

use loggate::{IntervalGate, OnceGate};

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum Gate {
    /// Hammer one IntervalGate with the configured interval.
    Every,
    /// Hammer one OnceGate.
    Once,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "loggate-stress",
    about = "Load test / benchmark harness for loggate"
)]
struct Args {
    #[arg(long, value_enum, default_value_t = Gate::Every)]
    gate: Gate,

    #[arg(long, default_value_t = 8)]
    threads: usize,

    #[arg(long, default_value_t = 10)]
    duration_s: u64,

    /// Only used when `--gate every`. Non-positive disables throttling.
    #[arg(long, default_value_t = 100)]
    interval_ms: i64,

    #[arg(long, default_value_t = 100)]
    sample_every: u64,
}

#[derive(Default)]
struct Counts {
    passed: AtomicU64,
    suppressed: AtomicU64,
}

fn should_sample(iter: u64, sample_every: u64) -> bool {
    if sample_every <= 1 {
        return true;
    }

    iter.is_multiple_of(sample_every)
}

fn print_results(
    args: &Args,
    elapsed: Duration,
    ops: u64,
    ops_s: f64,
    hist: &Histogram<u64>,
    counts: &Counts,
) {
    println!(
        "gate={:?} threads={} duration_s={} interval_ms={}",
        args.gate, args.threads, args.duration_s, args.interval_ms
    );
    println!(
        "elapsed_s={:.3} ops={} ops_per_s={:.0}",
        elapsed.as_secs_f64(),
        ops,
        ops_s
    );
    println!(
        "passed={} suppressed={}",
        counts.passed.load(Ordering::Relaxed),
        counts.suppressed.load(Ordering::Relaxed)
    );

    if args.gate == Gate::Every && args.interval_ms > 0 {
        let expected =
            (elapsed.as_millis() as u64).div_ceil(args.interval_ms.unsigned_abs()) + 1;
        println!(
            "pass_bound={} (ceil(T/I) + 1 boundary race allowance)",
            expected
        );
    }

    if !hist.is_empty() {
        let p50 = hist.value_at_quantile(0.50);
        let p95 = hist.value_at_quantile(0.95);
        let p99 = hist.value_at_quantile(0.99);
        println!(
            "lat_ns p50={} p95={} p99={} max={}",
            p50,
            p95,
            p99,
            hist.max()
        );
        println!("sample_every={} samples={}", args.sample_every, hist.len());
    } else {
        println!("no latency samples collected");
    }
}

enum AnyGate {
    Every(IntervalGate),
    Once(OnceGate),
}

impl AnyGate {
    fn try_acquire(&self) -> bool {
        match self {
            AnyGate::Every(gate) => gate.try_acquire(),
            AnyGate::Once(gate) => gate.try_acquire(),
        }
    }
}

fn main() {
    let args = Args::parse();

    let gate = Arc::new(match args.gate {
        Gate::Every => AnyGate::Every(IntervalGate::new(args.interval_ms)),
        Gate::Once => AnyGate::Once(OnceGate::new()),
    });

    let stop = Arc::new(AtomicBool::new(false));
    let counts = Arc::new(Counts::default());
    let total_ops = Arc::new(AtomicU64::new(0));

    let started = Instant::now();
    let deadline = started + Duration::from_secs(args.duration_s);

    let mut handles = Vec::with_capacity(args.threads);
    for _ in 0..args.threads {
        let gate = Arc::clone(&gate);
        let stop = Arc::clone(&stop);
        let counts = Arc::clone(&counts);
        let total_ops = Arc::clone(&total_ops);
        let args = args.clone();

        handles.push(std::thread::spawn(move || {
            let mut hist = Histogram::<u64>::new_with_bounds(1, 60_000_000_000, 3).unwrap();
            let mut i = 0_u64;

            while !stop.load(Ordering::Relaxed) {
                if Instant::now() >= deadline {
                    break;
                }

                i = i.wrapping_add(1);
                let sample = should_sample(i, args.sample_every);
                let t0 = if sample { Some(Instant::now()) } else { None };

                let passed = gate.try_acquire();

                if let Some(t0) = t0 {
                    let ns = t0.elapsed().as_nanos() as u64;
                    let _ = hist.record(ns.max(1));
                }

                total_ops.fetch_add(1, Ordering::Relaxed);
                if passed {
                    counts.passed.fetch_add(1, Ordering::Relaxed);
                } else {
                    counts.suppressed.fetch_add(1, Ordering::Relaxed);
                }
            }

            hist
        }));
    }

    std::thread::sleep(Duration::from_secs(args.duration_s));
    stop.store(true, Ordering::Relaxed);

    let mut merged = Histogram::<u64>::new_with_bounds(1, 60_000_000_000, 3).unwrap();
    for h in handles {
        let hist = h.join().unwrap();
        merged.add(&hist).unwrap();
    }

    let elapsed = started.elapsed();
    let ops = total_ops.load(Ordering::Relaxed);
    let ops_s = ops as f64 / elapsed.as_secs_f64();
    print_results(&args, elapsed, ops, ops_s, &merged, &counts);
}
