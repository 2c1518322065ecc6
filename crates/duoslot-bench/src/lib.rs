//! Workloads for benchmarking the duoslot containers.
//!
//! - [`tiny_sizes`]: list lengths skewed towards 0..=3, the range where
//!   inline storage and promotion/demotion matter
//! - [`churn_script`]: deterministic push/pop sequence that crosses the
//!   inline boundary repeatedly
//! - [`run_churn`]: replays a script against any [`Sequence`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use duoslot::Sequence;

/// One step of a churn workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Append the value.
    Push(u64),
    /// Remove the last element, if any.
    Pop,
}

/// Deterministic 64-bit LCG (Knuth MMIX constants).
fn lcg(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state >> 33
}

/// Generate `n` list lengths in `0..=max`, three quarters of them at
/// most 3.
pub fn tiny_sizes(n: usize, max: usize, seed: u64) -> Vec<usize> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            let r = lcg(&mut state);
            if r % 4 == 0 {
                (r / 4) as usize % (max + 1)
            } else {
                (r / 4) as usize % 4
            }
        })
        .collect()
}

/// Generate `n` steps that random-walk the length within `0..=peak`.
pub fn churn_script(n: usize, peak: usize, seed: u64) -> Vec<Step> {
    let mut state = seed;
    let mut len = 0usize;
    let mut steps = Vec::with_capacity(n);
    for _ in 0..n {
        let r = lcg(&mut state);
        let push = len == 0 || (len < peak && r % 2 == 0);
        if push {
            steps.push(Step::Push(r));
            len += 1;
        } else {
            steps.push(Step::Pop);
            len -= 1;
        }
    }
    steps
}

/// Replay `steps` against `list`. Returns the final length.
pub fn run_churn<S: Sequence<u64>>(list: &mut S, steps: &[Step]) -> usize {
    for step in steps {
        match *step {
            Step::Push(v) => {
                list.push(v).expect("churn push within default limits");
            }
            Step::Pop => {
                let len = list.len();
                if len > 0 {
                    list.remove(len - 1).expect("churn pop of last element");
                }
            }
        }
    }
    list.len()
}
