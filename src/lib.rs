/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
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
#![allow(clippy::too_many_arguments)]
mod bluestein;
mod butterflies;
#[cfg(test)]
mod dft;
mod err;
mod mixed_radix;
mod radix2;
mod radix3;
mod radix4;
mod radix5;
mod radix_g;
mod threading;
mod util;

pub use err::ReftError;
pub use threading::ThreadingPolicy;

use crate::bluestein::BluesteinFft;
use crate::butterflies::{forward_len4, SplitRadixTables};
use crate::mixed_radix::{ComplexFactorTable, RealFactorTable};
use crate::util::residual_factor;

/// Residual factors at least this large go through the chirp-z convolution:
/// the general-radix pass costs O(p^2) per stage while the convolution stays
/// within three power-of-two transforms of at most 4n points.
const BLUESTEIN_MIN_RESIDUAL: usize = 211;

/// Which of the three engines a plan dispatches to.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum PlanKind {
    /// Power-of-two lengths through the split-radix complex passes.
    SplitRadix,
    /// Lengths built from factors 2/3/4/5 and small general factors.
    MixedRadix,
    /// Everything with a rough residual factor, including large primes.
    Bluestein,
}

enum Plan {
    SplitRadix {
        cft: SplitRadixTables,
    },
    MixedRadix {
        #[allow(unused)]
        wtable: ComplexFactorTable,
        wtable_r: RealFactorTable,
    },
    Bluestein(BluesteinFft),
}

/// Single precision forward DFT of real input of arbitrary length.
///
/// A plan is immutable once built: all twiddle, chirp and index tables are
/// computed in the constructor and only read afterwards, so one plan can be
/// shared freely across threads. Transforms mutate nothing but the caller's
/// buffer and a per-call scratch allocation.
pub struct RealFft1D {
    n: usize,
    plan: Plan,
    threading: ThreadingPolicy,
}

impl RealFft1D {
    pub fn new(n: usize) -> Result<RealFft1D, ReftError> {
        RealFft1D::with_threading(n, ThreadingPolicy::default())
    }

    /// Builds a plan with an explicit worker policy for the chirp-z
    /// element-wise passes; all other paths ignore it.
    pub fn with_threading(n: usize, threading: ThreadingPolicy) -> Result<RealFft1D, ReftError> {
        if n < 1 {
            return Err(ReftError::ZeroSizedFft);
        }
        let plan = match RealFft1D::select(n) {
            PlanKind::SplitRadix => Plan::SplitRadix {
                cft: SplitRadixTables::new(n, n >> 2, n)?,
            },
            PlanKind::Bluestein => Plan::Bluestein(BluesteinFft::new(n)?),
            PlanKind::MixedRadix => {
                let wtable = ComplexFactorTable::new(n)?;
                let wtable_r = RealFactorTable::new(n)?;
                debug_assert_eq!(wtable.factors(), wtable_r.factors());
                debug_assert_eq!(wtable.twiddles().len(), 2 * n);
                debug_assert_eq!(wtable_r.twiddles().len(), n);
                Plan::MixedRadix { wtable, wtable_r }
            }
        };
        Ok(RealFft1D { n, plan, threading })
    }

    fn select(n: usize) -> PlanKind {
        if n.is_power_of_two() {
            PlanKind::SplitRadix
        } else if residual_factor(n) >= BLUESTEIN_MIN_RESIDUAL {
            PlanKind::Bluestein
        } else {
            PlanKind::MixedRadix
        }
    }

    /// Computes the forward DFT of `n` real samples starting at `offset`,
    /// leaving the packed half spectrum in place.
    ///
    /// For even n:
    ///
    /// ```text
    /// a[offset + 2k]     = Re[k], 0 <= k < n/2
    /// a[offset + 2k + 1] = Im[k], 0 <  k < n/2
    /// a[offset + 1]      = Re[n/2]
    /// ```
    ///
    /// For odd n:
    ///
    /// ```text
    /// a[offset + 2k]     = Re[k], 0 <= k <= (n-1)/2
    /// a[offset + 2k + 1] = Im[k], 0 <  k <  (n-1)/2
    /// a[offset + 1]      = Im[(n-1)/2]
    /// ```
    ///
    /// The exponent is negative and the transform is unnormalized. The other
    /// half of the spectrum is the conjugate mirror of what is stored.
    ///
    /// # Errors
    /// Returns [`ReftError::InvalidInPlaceLength`] when the buffer holds
    /// fewer than `offset + n` elements.
    pub fn real_forward(&self, a: &mut [f32], offset: usize) -> Result<(), ReftError> {
        let end = offset
            .checked_add(self.n)
            .ok_or(ReftError::SizeOverflow(self.n))?;
        if a.len() < end {
            return Err(ReftError::InvalidInPlaceLength(a.len(), end));
        }
        let a = &mut a[offset..end];
        if self.n == 1 {
            return Ok(());
        }
        match &self.plan {
            Plan::SplitRadix { cft } => {
                if self.n > 4 {
                    cft.forward(a);
                    cft.real_forward_post(a);
                } else if self.n == 4 {
                    forward_len4(a);
                }
                let xi = a[0] - a[1];
                a[0] += a[1];
                a[1] = xi;
            }
            Plan::MixedRadix { wtable_r, .. } => {
                mixed_radix::real_forward_seq(wtable_r, a)?;
                // The pass output keeps DC and the top bin interleaved the
                // classic way; one neighbor rotation from the top yields the
                // packed layout above.
                for k in (2..self.n).rev() {
                    a.swap(k, k - 1);
                }
            }
            Plan::Bluestein(chirp) => chirp.real_forward(a, &self.threading)?,
        }
        Ok(())
    }

    pub fn kind(&self) -> PlanKind {
        match self.plan {
            Plan::SplitRadix { .. } => PlanKind::SplitRadix,
            Plan::MixedRadix { .. } => PlanKind::MixedRadix,
            Plan::Bluestein(..) => PlanKind::Bluestein,
        }
    }

    pub fn length(&self) -> usize {
        self.n
    }
}
