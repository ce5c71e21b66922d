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
use crate::err::{try_vec, ReftError};
use crate::util::unit_phase;

/// Precomputed tables for the in-place complex passes over a power-of-two
/// buffer of interleaved `(re, im)` f32 slots.
///
/// `w[..nw]` holds half-circle cos/sin twiddle pairs at the kernel's
/// resolution, `w[nw..nw + nc]` the half-secant table consumed by the real
/// postprocessing fold. `ip[0]` and `ip[1]` record that split; `ip[2..]` is
/// the square-root decomposition table driving the bit-reversal permutation.
/// Everything is filled once here and never written again, so one table set
/// can serve concurrent transform calls.
pub(crate) struct SplitRadixTables {
    ip: Vec<usize>,
    w: Vec<f32>,
    nw: usize,
    nc: usize,
}

impl SplitRadixTables {
    /// `len` is the interleaved slot count the passes will see (`len / 2`
    /// complex points), `nc` the half-secant table size (zero when the real
    /// postprocessing fold is never run), and `index_len` the plan-level
    /// length that sizes the bit-reversal index table.
    pub(crate) fn new(len: usize, nc: usize, index_len: usize) -> Result<Self, ReftError> {
        debug_assert!(len.is_power_of_two());
        let nw = len >> 1;
        let ip_len = 4 + (1usize << (index_len.ilog2() as usize / 2));
        let mut ip = try_vec![0usize; ip_len];
        ip[0] = nw;
        ip[1] = nc;
        // Square-root decomposition of the reversal: entry j holds the
        // scaled bit reverse of j, built alongside the halving of l.
        let mut l = len;
        let mut m = 1usize;
        while (m << 3) < l {
            l >>= 1;
            for j in 0..m {
                ip[2 + m + j] = ip[2 + j] + l;
            }
            m <<= 1;
        }
        let mut w = try_vec![0f32; nw + nc];
        makewt(nw, &mut w[..nw]);
        makect(nc, &mut w[nw..]);
        Ok(SplitRadixTables { ip, w, nw, nc })
    }

    /// In-place complex DFT with negative exponent over `a.len() / 2` points.
    pub(crate) fn forward(&self, a: &mut [f32]) {
        debug_assert_eq!(a.len(), self.nw * 2);
        bit_reverse(a, &self.ip);
        passes(a, &self.w[..self.nw], -1.0);
    }

    /// The conjugate transform: positive exponent, unnormalized.
    pub(crate) fn inverse(&self, a: &mut [f32]) {
        debug_assert_eq!(a.len(), self.nw * 2);
        bit_reverse(a, &self.ip);
        passes(a, &self.w[..self.nw], 1.0);
    }

    /// Folds the half-size complex spectrum of packed real input into the
    /// real half-spectrum, pairing bins `j` and `n - j` in place.
    ///
    /// On entry `a` holds the forward transform of `a.len() / 2` complex
    /// points formed from even/odd real samples; on exit it holds the real
    /// spectrum up to the DC/Nyquist patch applied by the caller.
    pub(crate) fn real_forward_post(&self, a: &mut [f32]) {
        let n = a.len();
        let m = n >> 1;
        let nc = self.nc;
        let c = &self.w[self.nw..];
        let ks = 2 * nc / m;
        let mut kk = 0usize;
        let mut j = 2usize;
        while j < m {
            let k = n - j;
            kk += ks;
            let wkr = 0.5 + c[nc - kk];
            let wki = c[kk];
            let xr = a[j] - a[k];
            let xi = a[j + 1] + a[k + 1];
            let yr = wkr * xr - wki * xi;
            let yi = wkr * xi + wki * xr;
            a[j] -= yr;
            a[j + 1] -= yi;
            a[k] += yr;
            a[k + 1] -= yi;
            j += 2;
        }
        // The self-paired middle bin only needs its conjugation.
        a[m + 1] = -a[m + 1];
    }
}

/// The four-slot special case of the forward real transform: a two-point
/// DFT whose second output is conjugated so the caller's DC/Nyquist patch
/// lands on the packed layout.
pub(crate) fn forward_len4(a: &mut [f32]) {
    let x0r = a[0] - a[2];
    let x0i = -a[1] + a[3];
    a[0] += a[2];
    a[1] += a[3];
    a[2] = x0r;
    a[3] = x0i;
}

/// Half-circle twiddles: `nw / 2` cos/sin pairs at the resolution of an
/// `nw`-point complex transform, computed in f64.
fn makewt(nw: usize, w: &mut [f32]) {
    if nw < 2 {
        return;
    }
    let step = 2.0 * std::f64::consts::PI / nw as f64;
    for t in 0..(nw >> 1) {
        let ph = unit_phase(step * t as f64);
        w[2 * t] = ph.re;
        w[2 * t + 1] = ph.im;
    }
}

/// Half-secant table for the real postprocessing fold: `0.5 * cos` over the
/// first quadrant, read from both ends to recover cos and sin.
fn makect(nc: usize, c: &mut [f32]) {
    if nc == 0 {
        return;
    }
    let delta = std::f64::consts::FRAC_PI_2 / nc as f64;
    for (j, dst) in c.iter_mut().enumerate() {
        *dst = unit_phase(delta * j as f64).re * 0.5;
    }
}

fn bitrev_geometry(len: usize) -> (usize, usize) {
    let mut l = len;
    let mut m = 1usize;
    while (m << 3) < l {
        l >>= 1;
        m <<= 1;
    }
    (m, l)
}

/// In-place bit-reversal permutation of `a.len() / 2` complex points, driven
/// by the square-root table in `ip[2..]`. Element pairs are enumerated as
/// (low digits, high digits) so only O(sqrt) table entries are needed.
fn bit_reverse(a: &mut [f32], ip: &[usize]) {
    let (m, l) = bitrev_geometry(a.len());
    let m2 = 2 * m;
    if (m << 3) == l {
        for k in 0..m {
            for j in 0..k {
                let mut j1 = 2 * j + ip[2 + k];
                let mut k1 = 2 * k + ip[2 + j];
                a.swap(j1, k1);
                a.swap(j1 + 1, k1 + 1);
                j1 += m2;
                k1 += 2 * m2;
                a.swap(j1, k1);
                a.swap(j1 + 1, k1 + 1);
                j1 += m2;
                k1 -= m2;
                a.swap(j1, k1);
                a.swap(j1 + 1, k1 + 1);
                j1 += m2;
                k1 += 2 * m2;
                a.swap(j1, k1);
                a.swap(j1 + 1, k1 + 1);
            }
            let j1 = 2 * k + m2 + ip[2 + k];
            let k1 = j1 + m2;
            a.swap(j1, k1);
            a.swap(j1 + 1, k1 + 1);
        }
    } else {
        for k in 1..m {
            for j in 0..k {
                let mut j1 = 2 * j + ip[2 + k];
                let mut k1 = 2 * k + ip[2 + j];
                a.swap(j1, k1);
                a.swap(j1 + 1, k1 + 1);
                j1 += m2;
                k1 += m2;
                a.swap(j1, k1);
                a.swap(j1 + 1, k1 + 1);
            }
        }
    }
}

/// Decimation-in-time cascade over bit-reversed data. `sign` selects the
/// exponent: -1 for the forward transform, +1 for its conjugate.
fn passes(a: &mut [f32], w: &[f32], sign: f32) {
    let mc = a.len() >> 1;
    let mut half = 1usize;
    while half < mc {
        let tstride = mc / (half << 1);
        let mut blk = 0usize;
        while blk < mc {
            for j in 0..half {
                let t = j * tstride;
                let wr = w[2 * t];
                let wi = sign * w[2 * t + 1];
                let i0 = 2 * (blk + j);
                let i1 = 2 * (blk + j + half);
                let xr = a[i1] * wr - a[i1 + 1] * wi;
                let xi = a[i1] * wi + a[i1 + 1] * wr;
                a[i1] = a[i0] - xr;
                a[i1 + 1] = a[i0 + 1] - xi;
                a[i0] += xr;
                a[i0 + 1] += xi;
            }
            blk += half << 1;
        }
        half <<= 1;
    }
}
