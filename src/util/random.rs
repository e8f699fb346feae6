use std::collections::HashSet;
use std::hash::Hash;

use rand::{distributions::Alphanumeric, prelude::ThreadRng, Rng};

pub trait Random {
    fn gen(rng: &mut ThreadRng) -> Self;
}

const RANDOM_STRING_MIN: usize = 0;
const RANDOM_STRING_MAX: usize = 10;

impl Random for String {
    // get random string whose length is in [RANDOM_STRING_MIN, RANDOM_STRING_MAX)
    fn gen(rng: &mut ThreadRng) -> Self {
        let length: usize = rng.gen_range(RANDOM_STRING_MIN..RANDOM_STRING_MAX);

        rng.sample_iter(&Alphanumeric)
            .map(char::from)
            .take(length)
            .collect()
    }
}

impl Random for u64 {
    fn gen(rng: &mut ThreadRng) -> Self {
        rng.gen()
    }
}

impl Random for u32 {
    fn gen(rng: &mut ThreadRng) -> Self {
        rng.gen()
    }
}

impl Random for i64 {
    fn gen(rng: &mut ThreadRng) -> Self {
        rng.gen()
    }
}

/// Generate up to `count` pairwise distinct keys.
///
/// Gives up on a key after 10 collisions in a row, so small key spaces (short
/// strings) may return fewer than `count` keys.
pub fn gen_distinct<K: Random + Eq + Hash + Clone>(rng: &mut ThreadRng, count: usize) -> Vec<K> {
    let mut seen = HashSet::with_capacity(count);
    let mut keys = Vec::with_capacity(count);

    'outer: while keys.len() < count {
        for _ in 0..10 {
            let key = K::gen(rng);

            if seen.insert(key.clone()) {
                keys.push(key);
                continue 'outer;
            }
        }

        break;
    }

    keys
}
