/*
 * // Copyright (c) Radzivon Bartoshyk 11/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

/// Controls how the element-wise chirp-z passes fan out over a thread pool.
///
/// The pool is only engaged for transforms long enough to amortize the
/// submission cost; everything below `threshold_two` runs on the calling
/// thread. Both thresholds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadingPolicy {
    /// Maximum worker count made available to one transform call.
    pub threads: usize,
    /// Minimum transform length before two workers are used.
    pub threshold_two: usize,
    /// Minimum transform length before four workers are used.
    pub threshold_four: usize,
}

impl Default for ThreadingPolicy {
    fn default() -> Self {
        ThreadingPolicy {
            threads: std::thread::available_parallelism()
                .map(|v| v.get())
                .unwrap_or(1),
            threshold_two: 8192,
            threshold_four: 65536,
        }
    }
}

impl ThreadingPolicy {
    /// A policy that always stays on the calling thread.
    pub fn serial() -> ThreadingPolicy {
        ThreadingPolicy {
            threads: 1,
            ..Default::default()
        }
    }

    pub(crate) fn workers(&self, n: usize) -> usize {
        if self.threads >= 4 && n >= self.threshold_four {
            4
        } else if self.threads >= 2 && n >= self.threshold_two {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_selection_honors_thresholds() {
        let policy = ThreadingPolicy {
            threads: 8,
            threshold_two: 100,
            threshold_four: 1000,
        };
        assert_eq!(policy.workers(99), 1);
        assert_eq!(policy.workers(100), 2);
        assert_eq!(policy.workers(999), 2);
        assert_eq!(policy.workers(1000), 4);
    }

    #[test]
    fn worker_selection_honors_pool_size() {
        let two = ThreadingPolicy {
            threads: 2,
            threshold_two: 1,
            threshold_four: 1,
        };
        assert_eq!(two.workers(1 << 20), 2);
        assert_eq!(ThreadingPolicy::serial().workers(1 << 20), 1);
    }

    #[test]
    fn worker_selection_with_three_threads() {
        let three = ThreadingPolicy {
            threads: 3,
            threshold_two: 1,
            threshold_four: 1,
        };
        assert_eq!(three.workers(1 << 20), 2);
    }
}
