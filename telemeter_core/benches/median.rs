use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use telemeter_core::{Sample, median_into};

// Generate a synthetic distance trace: slow drift with additive noise
fn synth_trace(n: usize, seed: u32) -> Vec<Sample> {
    // tiny PRNG
    let mut state = seed.max(1);
    let mut next_u32 = || {
        let mut x = state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        state = x;
        x
    };
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        let drift = 500 + (i as u32 / 40) % 300;
        let noise = next_u32() % 25;
        v.push(drift + noise);
    }
    v
}

fn sort_median(window: &[Sample]) -> Sample {
    let mut sorted = window.to_vec();
    sorted.sort_unstable();
    sorted[sorted.len() / 2]
}

pub fn bench_window_median(c: &mut Criterion) {
    let mut g = c.benchmark_group("window_median");
    // Allow quick tweaking without CLI flags (Criterion 0.5):
    //   BENCH_SAMPLE_SIZE=10 BENCH_MEAS_MS=50 cargo bench -p telemeter_core --bench median
    if let Ok(ss) = std::env::var("BENCH_SAMPLE_SIZE") {
        if let Ok(n) = ss.parse::<usize>() {
            g.sample_size(n.max(1));
        }
    } else {
        g.sample_size(50);
    }
    if let Ok(ms) = std::env::var("BENCH_MEAS_MS")
        && let Ok(ms_u64) = ms.parse::<u64>()
    {
        g.measurement_time(std::time::Duration::from_millis(ms_u64));
    }

    for &len in &[21usize, 101, 501] {
        let trace = synth_trace(len, 0xC0FFEE);

        g.bench_function(format!("quickselect_{len}"), |b| {
            let mut scratch = Vec::with_capacity(len);
            b.iter_batched(
                || trace.clone(),
                |w| {
                    let m = median_into(black_box(&w), &mut scratch);
                    black_box(m);
                },
                BatchSize::SmallInput,
            )
        });

        g.bench_function(format!("full_sort_{len}"), |b| {
            b.iter_batched(
                || trace.clone(),
                |w| {
                    let m = sort_median(black_box(&w));
                    black_box(m);
                },
                BatchSize::SmallInput,
            )
        });
    }
    g.finish();
}

criterion_group!(median, bench_window_median);
criterion_main!(median);
