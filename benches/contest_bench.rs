//! Criterion benchmarks for contest scoring.
//!
//! Contests are generated from a fixed seed: `n` states, `n / 4` judges and
//! `votes_per_state` random citizen votes cast by every state.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use songvote::contest::{Contest, RANKING_LEN};
use songvote::map::OrderedMap;

// ===========================================================================
// Fixtures
// ===========================================================================

fn state_name(mut i: usize) -> String {
    let mut name = String::new();
    loop {
        name.push((b'a' + (i % 26) as u8) as char);
        i /= 26;
        if i == 0 {
            break;
        }
    }
    name
}

fn random_contest(n: usize, votes_per_state: usize, seed: u64) -> Contest {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut contest = Contest::new();
    for id in 0..n {
        contest
            .add_state(id as i64, &state_name(id), "song")
            .expect("valid state");
    }

    let ids: Vec<i64> = (0..n as i64).collect();
    for judge_id in 0..(n / 4) as i64 {
        let picked: Vec<i64> = ids
            .choose_multiple(&mut rng, RANKING_LEN)
            .copied()
            .collect();
        let ranking: [i64; RANKING_LEN] = picked.try_into().expect("ten states");
        contest
            .add_judge(judge_id, "judge", &ranking)
            .expect("valid judge");
    }

    for giver in 0..n as i64 {
        for _ in 0..votes_per_state {
            let taker = rng.random_range(0..n as i64);
            if taker != giver {
                contest.add_vote(giver, taker).expect("valid vote");
            }
        }
    }
    contest
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_map_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_put");

    for &n in &[100usize, 1_000, 10_000] {
        let mut rng = StdRng::seed_from_u64(7);
        let keys: Vec<u32> = (0..n).map(|_| rng.random()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut map = OrderedMap::new();
                for &k in keys {
                    map.put(k, k).expect("put");
                }
                black_box(map)
            })
        });
    }
    group.finish();
}

fn bench_run_contest(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_contest");
    group.sample_size(20);

    for (n, votes) in [(40usize, 50usize), (200, 100), (1_000, 100)] {
        let contest = random_contest(n, votes, 42);
        group.bench_with_input(
            BenchmarkId::new(format!("s{}_v{}", n, votes), n),
            &contest,
            |b, contest| {
                b.iter(|| {
                    let mut contest = contest.clone();
                    black_box(contest.run_contest(black_box(60)).expect("valid percent"))
                })
            },
        );
    }
    group.finish();
}

fn bench_friendly_states(c: &mut Criterion) {
    let mut group = c.benchmark_group("friendly_states");
    group.sample_size(20);

    for &n in &[40usize, 200, 1_000] {
        let contest = random_contest(n, 30, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &contest, |b, contest| {
            b.iter(|| black_box(contest.run_friendly_states()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_map_put, bench_run_contest, bench_friendly_states);
criterion_main!(benches);
