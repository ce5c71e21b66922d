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
use crate::butterflies::SplitRadixTables;
use crate::err::{try_vec, ReftError};
use crate::threading::ThreadingPolicy;
use crate::util::unit_phase;
use novtb::{ParallelZonedIterator, TbSliceMut};
use num_complex::Complex;
use num_traits::Zero;

/// Chirp-z engine for lengths whose residual factor is too rough for the
/// mixed-radix passes.
///
/// The length-n transform becomes a circular convolution of the chirped
/// input with the chirp itself, carried on a power-of-two buffer of
/// `n_blue >= 2n - 1` complex points. `bk1` is the chirp, `bk2` the
/// frequency-domain mirrored chirp with the 1/n_blue convolution scale
/// folded in.
pub(crate) struct BluesteinFft {
    n: usize,
    n_blue: usize,
    cft: SplitRadixTables,
    bk1: Vec<Complex<f32>>,
    bk2: Vec<f32>,
}

impl BluesteinFft {
    pub(crate) fn new(n: usize) -> Result<Self, ReftError> {
        let min_len = 2usize
            .checked_mul(n)
            .and_then(|v| v.checked_sub(1))
            .ok_or(ReftError::SizeOverflow(n))?;
        let n_blue = min_len
            .checked_next_power_of_two()
            .ok_or(ReftError::SizeOverflow(n))?;
        let two_blue = n_blue.checked_mul(2).ok_or(ReftError::SizeOverflow(n))?;

        // bk1(k) = exp(i*pi*(k^2 mod 2n)/n); the running sum of odd numbers
        // keeps the squared index reduced without ever dividing.
        let mut bk1 = try_vec![Complex::<f32>::zero(); n];
        bk1[0] = Complex::new(1.0, 0.0);
        let pi_n = std::f64::consts::PI / n as f64;
        let mut s = 0usize;
        for (i, dst) in bk1.iter_mut().enumerate().skip(1) {
            s += 2 * i - 1;
            if s >= 2 * n {
                s -= 2 * n;
            }
            *dst = unit_phase(pi_n * s as f64);
        }

        let cft = SplitRadixTables::new(two_blue, 0, n_blue)?;

        // The conjugate chirp, mirrored about n_blue and pre-transformed, so
        // the convolution needs one pointwise multiply per call.
        let mut bk2 = try_vec![0f32; two_blue];
        let scale = 1.0f32 / n_blue as f32;
        bk2[0] = bk1[0].re * scale;
        bk2[1] = bk1[0].im * scale;
        for i in 1..n {
            let b = bk1[i] * scale;
            bk2[2 * i] = b.re;
            bk2[2 * i + 1] = b.im;
            bk2[two_blue - 2 * i] = b.re;
            bk2[two_blue - 2 * i + 1] = b.im;
        }
        cft.inverse(&mut bk2);

        Ok(BluesteinFft {
            n,
            n_blue,
            cft,
            bk1,
            bk2,
        })
    }

    pub(crate) fn real_forward(
        &self,
        a: &mut [f32],
        threading: &ThreadingPolicy,
    ) -> Result<(), ReftError> {
        let n = self.n;
        let n_blue = self.n_blue;
        let two_blue = 2 * n_blue;
        let mut ak = try_vec![0f32; two_blue];
        let bk1 = self.bk1.as_slice();
        let bk2 = self.bk2.as_slice();

        let workers = threading.workers(n);
        if workers > 1 {
            let pool = novtb::ThreadPool::new(workers);
            let src = &a[..n];

            // a(k) * conj(bk1(k)) into the zero-padded convolution buffer.
            let per = n / workers;
            let (head, _) = ak.split_at_mut(2 * per * workers);
            head.tb_par_chunks_exact_mut(2 * per)
                .for_each_enumerated(&pool, |ci, dst| {
                    let base = ci * per;
                    for (i, pair) in dst.chunks_exact_mut(2).enumerate() {
                        let b = bk1[base + i];
                        let x = src[base + i];
                        pair[0] = x * b.re;
                        pair[1] = -x * b.im;
                    }
                });
            // At most workers - 1 elements fall past the equal chunks.
            for k in per * workers..n {
                let b = bk1[k];
                ak[2 * k] = src[k] * b.re;
                ak[2 * k + 1] = -src[k] * b.im;
            }

            self.cft.inverse(&mut ak);

            let chunk = two_blue / workers;
            ak.as_mut_slice()
                .tb_par_chunks_exact_mut(chunk)
                .for_each_enumerated(&pool, |ci, dst| {
                    let base = ci * chunk;
                    for (i, pair) in dst.chunks_exact_mut(2).enumerate() {
                        let idx = base + 2 * i;
                        let t = Complex::new(pair[0], pair[1])
                            * Complex::new(bk2[idx], bk2[idx + 1]);
                        pair[0] = t.re;
                        pair[1] = t.im;
                    }
                });
        } else {
            for k in 0..n {
                let b = bk1[k];
                ak[2 * k] = a[k] * b.re;
                ak[2 * k + 1] = -a[k] * b.im;
            }

            self.cft.inverse(&mut ak);

            for (idx, pair) in ak.chunks_exact_mut(2).enumerate() {
                let t = Complex::new(pair[0], pair[1])
                    * Complex::new(bk2[2 * idx], bk2[2 * idx + 1]);
                pair[0] = t.re;
                pair[1] = t.im;
            }
        }

        self.cft.forward(&mut ak);

        // Undo the leading chirp while packing the half spectrum.
        if n.is_multiple_of(2) {
            a[0] = bk1[0].re * ak[0] + bk1[0].im * ak[1];
            let bn = bk1[n / 2];
            a[1] = bn.re * ak[n] + bn.im * ak[n + 1];
            for i in 1..n / 2 {
                let idx1 = 2 * i;
                let idx2 = idx1 + 1;
                let b = bk1[i];
                a[idx1] = b.re * ak[idx1] + b.im * ak[idx2];
                a[idx2] = -b.im * ak[idx1] + b.re * ak[idx2];
            }
        } else {
            a[0] = bk1[0].re * ak[0] + bk1[0].im * ak[1];
            let bn = bk1[n / 2];
            a[1] = -bn.im * ak[n - 1] + bn.re * ak[n];
            for i in 1..(n - 1) / 2 {
                let idx1 = 2 * i;
                let idx2 = idx1 + 1;
                let b = bk1[i];
                a[idx1] = b.re * ak[idx1] + b.im * ak[idx2];
                a[idx2] = -b.im * ak[idx1] + b.re * ak[idx2];
            }
            a[n - 1] = bn.re * ak[n - 1] + bn.im * ak[n];
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::dft::real_forward_reference;
    use crate::threading::ThreadingPolicy;
    use crate::{PlanKind, RealFft1D};
    use rand::Rng;

    #[test]
    fn impulse_through_chirp_z() {
        let n = 211usize;
        let mut data = vec![0f32; n];
        data[0] = 1.0;
        let fft = RealFft1D::new(n).unwrap();
        assert_eq!(fft.kind(), PlanKind::Bluestein);
        fft.real_forward(&mut data, 0).unwrap();
        assert!((data[0] - 1.0).abs() < 1e-3, "dc {}", data[0]);
        assert!(data[1].abs() < 1e-3, "top imag {}", data[1]);
        for k in 1..n / 2 {
            assert!((data[2 * k] - 1.0).abs() < 1e-3, "re at {k}: {}", data[2 * k]);
            assert!(data[2 * k + 1].abs() < 1e-3, "im at {k}: {}", data[2 * k + 1]);
        }
    }

    #[test]
    fn rough_lengths_match_reference() {
        for n in [211usize, 257, 422, 509] {
            let mut data = vec![0f32; n];
            for v in data.iter_mut() {
                *v = rand::rng().random_range(-1.0..1.0);
            }
            let reference = real_forward_reference(&data);
            let fft = RealFft1D::new(n).unwrap();
            assert_eq!(fft.kind(), PlanKind::Bluestein);
            fft.real_forward(&mut data, 0).unwrap();
            for (idx, (a, b)) in data.iter().zip(reference.iter()).enumerate() {
                assert!(
                    (a - b).abs() < 2e-4 * n as f32,
                    "{a} != {b} at {idx} for size {n}"
                );
            }
        }
    }

    #[test]
    fn worker_counts_agree_bitwise() {
        for n in [211usize, 509, 1009] {
            let mut input = vec![0f32; n];
            for v in input.iter_mut() {
                *v = rand::rng().random_range(-1.0..1.0);
            }
            let mut outputs = Vec::new();
            for threads in [1usize, 2, 4] {
                let policy = ThreadingPolicy {
                    threads,
                    threshold_two: 1,
                    threshold_four: 1,
                };
                let fft = RealFft1D::with_threading(n, policy).unwrap();
                let mut data = input.clone();
                fft.real_forward(&mut data, 0).unwrap();
                outputs.push(data);
            }
            for other in &outputs[1..] {
                for (k, (a, b)) in outputs[0].iter().zip(other.iter()).enumerate() {
                    assert_eq!(a.to_bits(), b.to_bits(), "worker mismatch at {k} for {n}");
                }
            }
        }
    }
}
