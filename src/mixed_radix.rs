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
use crate::radix2::radf2;
use crate::radix3::radf3;
use crate::radix4::radf4;
use crate::radix5::radf5;
use crate::radix_g::radfg;
use crate::util::unit_phase;

/// Reduces `n` by the ordered trial divisors {4, 2, 3, 5, 7, 9, 11, ...}.
///
/// Whenever a 2 is found after the first factor it is moved to the front of
/// the list, so the pass sequence keeps every radix-4 and radix-2 stage at
/// the end of the (reversed) execution order.
fn factorize(n: usize) -> Vec<usize> {
    let mut factors = Vec::new();
    let mut nl = n;
    let mut ntry = 0usize;
    let mut j = 0usize;
    while nl != 1 {
        j += 1;
        ntry = match j {
            1 => 4,
            2 => 2,
            3 => 3,
            4 => 5,
            _ => ntry + 2,
        };
        while nl.is_multiple_of(ntry) {
            nl /= ntry;
            if ntry == 2 && !factors.is_empty() {
                factors.insert(0, 2);
            } else {
                factors.push(ntry);
            }
        }
    }
    factors
}

/// Factorization and twiddle table driving the real mixed-radix passes.
///
/// `w` mirrors the cos/sin region the radix kernels index through their
/// `offset` parameter; cos always sits on the lower index of a pair. The
/// factor list replaces the counted tail slots of the original table
/// format.
pub(crate) struct RealFactorTable {
    n: usize,
    factors: Vec<usize>,
    w: Vec<f32>,
}

impl RealFactorTable {
    pub(crate) fn new(n: usize) -> Result<Self, ReftError> {
        let factors = factorize(n);
        let mut w = try_vec![0f32; n];
        let nf = factors.len();
        let argh = 2.0 * std::f64::consts::PI / n as f64;
        let mut is = 0usize;
        let mut l1 = 1usize;
        if nf > 1 {
            for &ipll in factors.iter().take(nf - 1) {
                let l2 = l1 * ipll;
                let ido = n / l2;
                let mut ld = 0usize;
                for _ in 1..ipll {
                    ld += l1;
                    let mut i = is;
                    let argld = ld as f64 * argh;
                    let mut fi = 0.0f64;
                    let mut ii = 3usize;
                    while ii <= ido {
                        i += 2;
                        fi += 1.0;
                        let ph = unit_phase(fi * argld);
                        w[i - 2] = ph.re;
                        w[i - 1] = ph.im;
                        ii += 2;
                    }
                    is += ido;
                }
                l1 = l2;
            }
        }
        Ok(RealFactorTable { n, factors, w })
    }

    pub(crate) fn factors(&self) -> &[usize] {
        &self.factors
    }

    pub(crate) fn twiddles(&self) -> &[f32] {
        &self.w
    }
}

/// Factorization and twiddle table of the complex mixed-radix transform of
/// the same length, carried alongside the real one by the plan.
pub(crate) struct ComplexFactorTable {
    factors: Vec<usize>,
    w: Vec<f32>,
}

impl ComplexFactorTable {
    pub(crate) fn new(n: usize) -> Result<Self, ReftError> {
        let factors = factorize(n);
        let mut w = try_vec![0f32; 2 * n];
        let argh = 2.0 * std::f64::consts::PI / n as f64;
        let mut i = 1usize;
        let mut l1 = 1usize;
        for &ipll in factors.iter() {
            let mut ld = 0usize;
            let l2 = l1 * ipll;
            let ido = n / l2;
            let idot = ido + ido + 2;
            for _ in 1..ipll {
                let i1 = i;
                w[i - 1] = 1.0;
                w[i] = 0.0;
                ld += l1;
                let argld = ld as f64 * argh;
                let mut fi = 0.0f64;
                let mut ii = 4usize;
                while ii <= idot {
                    i += 2;
                    fi += 1.0;
                    let ph = unit_phase(fi * argld);
                    w[i - 1] = ph.re;
                    w[i] = ph.im;
                    ii += 2;
                }
                // Factors above 5 re-enter the first twiddle of the group,
                // so park a copy of the last one where the pass restarts.
                if ipll > 5 {
                    w[i1 - 1] = w[i - 1];
                    w[i1] = w[i];
                }
            }
            l1 = l2;
        }
        Ok(ComplexFactorTable { factors, w })
    }

    pub(crate) fn factors(&self) -> &[usize] {
        &self.factors
    }

    pub(crate) fn twiddles(&self) -> &[f32] {
        &self.w
    }
}

/// The real forward pass sequence over the reversed factor list.
///
/// `na` flips which of (`a`, `ch`) is the source for each pass; the general
/// radix works across both buffers and reports where it left the data. When
/// the final pass lands in the scratch buffer it is copied back.
pub(crate) fn real_forward_seq(table: &RealFactorTable, a: &mut [f32]) -> Result<(), ReftError> {
    let n = table.n;
    if n == 1 {
        return Ok(());
    }
    let mut ch = try_vec![0f32; n];
    let w = table.w.as_slice();
    let nf = table.factors.len();
    let mut na = 1usize;
    let mut l2 = n;
    let mut iw = n - 1;
    for k1 in 1..=nf {
        let kh = nf - k1;
        let ipll = table.factors[kh];
        let l1 = l2 / ipll;
        let ido = n / l2;
        let idl1 = ido * l1;
        iw -= (ipll - 1) * ido;
        na = 1 - na;
        match ipll {
            2 => {
                if na == 0 {
                    radf2(ido, l1, a, &mut ch, w, iw);
                } else {
                    radf2(ido, l1, &ch, a, w, iw);
                }
            }
            3 => {
                if na == 0 {
                    radf3(ido, l1, a, &mut ch, w, iw);
                } else {
                    radf3(ido, l1, &ch, a, w, iw);
                }
            }
            4 => {
                if na == 0 {
                    radf4(ido, l1, a, &mut ch, w, iw);
                } else {
                    radf4(ido, l1, &ch, a, w, iw);
                }
            }
            5 => {
                if na == 0 {
                    radf5(ido, l1, a, &mut ch, w, iw);
                } else {
                    radf5(ido, l1, &ch, a, w, iw);
                }
            }
            _ => {
                if ido == 1 {
                    na = 1 - na;
                }
                if na == 0 {
                    radfg(ido, ipll, l1, idl1, a, &mut ch, w, iw);
                    na = 1;
                } else {
                    radfg(ido, ipll, l1, idl1, &mut ch, a, w, iw);
                    na = 0;
                }
            }
        }
        l2 = l1;
    }
    if na == 0 {
        a[..n].copy_from_slice(&ch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dft::real_forward_reference;
    use crate::RealFft1D;
    use rand::Rng;

    #[test]
    fn factorization_moves_twos_first() {
        assert_eq!(factorize(6), vec![2, 3]);
        assert_eq!(factorize(24), vec![2, 4, 3]);
        assert_eq!(factorize(96), vec![2, 4, 4, 3]);
        assert_eq!(factorize(80), vec![4, 4, 5]);
        assert_eq!(factorize(210), vec![2, 3, 5, 7]);
        assert_eq!(factorize(77), vec![7, 11]);
    }

    #[test]
    fn factorization_covers_the_length() {
        for n in 2..2000usize {
            assert_eq!(factorize(n).iter().product::<usize>(), n, "for {n}");
        }
    }

    #[test]
    fn real_and_complex_tables_agree_on_factors() {
        for n in [6usize, 24, 90, 210, 1000] {
            let real = RealFactorTable::new(n).unwrap();
            let cplx = ComplexFactorTable::new(n).unwrap();
            assert_eq!(real.factors(), cplx.factors());
            assert_eq!(real.twiddles().len(), n);
            assert_eq!(cplx.twiddles().len(), 2 * n);
        }
    }

    #[test]
    fn smooth_lengths_match_reference() {
        for n in [6usize, 9, 10, 12, 15, 18, 30, 36, 60, 90, 100, 150, 360, 1000] {
            let mut data = vec![0f32; n];
            for v in data.iter_mut() {
                *v = rand::rng().random_range(-1.0..1.0);
            }
            let reference = real_forward_reference(&data);
            let fft = RealFft1D::new(n).unwrap();
            fft.real_forward(&mut data, 0).unwrap();
            for (idx, (a, b)) in data.iter().zip(reference.iter()).enumerate() {
                assert!(
                    (a - b).abs() < 1e-4 * n as f32,
                    "{a} != {b} at {idx} for size {n}"
                );
            }
        }
    }
}
