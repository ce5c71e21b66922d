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
use crate::util::unit_phase;

/// One general-radix pass of the real forward transform for an arbitrary
/// factor `ip`. Unlike the specialized radices this works across both
/// buffers: partial results ping-pong between `in_` and `out` and the
/// caller's `na` flag tracks which one holds the pass output.
///
/// The p-point DFT across column groups is the O(p^2) Goertzel-style
/// recurrence on (ar1, ai1)/(ar2, ai2). The two loop orders below are the
/// same computation with the hotter stride moved to the inner loop; `nbd`
/// against `l1` decides which one wins.
pub(crate) fn radfg(
    ido: usize,
    ip: usize,
    l1: usize,
    idl1: usize,
    in_: &mut [f32],
    out: &mut [f32],
    w: &[f32],
    offset: usize,
) {
    let ph = unit_phase(2.0 * std::f64::consts::PI / ip as f64);
    let dcp = ph.re;
    let dsp = ph.im;
    let ipph = (ip + 1) / 2;
    let nbd = (ido - 1) / 2;

    if ido != 1 {
        out[..idl1].copy_from_slice(&in_[..idl1]);
        for j in 1..ip {
            let idx1 = j * l1 * ido;
            for k in 0..l1 {
                let idx2 = k * ido + idx1;
                out[idx2] = in_[idx2];
            }
        }
        if nbd <= l1 {
            for j in 1..ip {
                let is = (j - 1) * ido;
                let idx1 = j * l1 * ido;
                let mut idij = is + 1;
                let mut i = 2usize;
                while i < ido {
                    let idx2 = idij + offset;
                    let w1r = w[idx2 - 1];
                    let w1i = w[idx2];
                    for k in 0..l1 {
                        let idx3 = k * ido + idx1;
                        let iidx1 = i + idx3;
                        let i1i = in_[iidx1 - 1];
                        let i1r = in_[iidx1];

                        out[iidx1 - 1] = w1r * i1i + w1i * i1r;
                        out[iidx1] = w1r * i1r - w1i * i1i;
                    }
                    idij += 2;
                    i += 2;
                }
            }
        } else {
            for j in 1..ip {
                let is = (j - 1) * ido;
                let idx1 = j * l1 * ido;
                for k in 0..l1 {
                    let mut idij = is + 1;
                    let idx3 = k * ido + idx1;
                    let mut i = 2usize;
                    while i < ido {
                        let idx2 = idij + offset;
                        let w1r = w[idx2 - 1];
                        let w1i = w[idx2];
                        let iidx1 = i + idx3;
                        let i1i = in_[iidx1 - 1];
                        let i1r = in_[iidx1];

                        out[iidx1 - 1] = w1r * i1i + w1i * i1r;
                        out[iidx1] = w1r * i1r - w1i * i1i;
                        idij += 2;
                        i += 2;
                    }
                }
            }
        }
        if nbd >= l1 {
            for j in 1..ipph {
                let jc = ip - j;
                let idx1 = j * l1 * ido;
                let idx2 = jc * l1 * ido;
                for k in 0..l1 {
                    let idx3 = k * ido + idx1;
                    let idx4 = k * ido + idx2;
                    let mut i = 2usize;
                    while i < ido {
                        let iidx1 = i + idx3;
                        let iidx2 = i + idx4;
                        let o1i = out[iidx1 - 1];
                        let o1r = out[iidx1];
                        let o2i = out[iidx2 - 1];
                        let o2r = out[iidx2];

                        in_[iidx1 - 1] = o1i + o2i;
                        in_[iidx1] = o1r + o2r;

                        in_[iidx2 - 1] = o1r - o2r;
                        in_[iidx2] = o2i - o1i;
                        i += 2;
                    }
                }
            }
        } else {
            for j in 1..ipph {
                let jc = ip - j;
                let idx1 = j * l1 * ido;
                let idx2 = jc * l1 * ido;
                let mut i = 2usize;
                while i < ido {
                    for k in 0..l1 {
                        let idx3 = k * ido + idx1;
                        let idx4 = k * ido + idx2;
                        let iidx1 = i + idx3;
                        let iidx2 = i + idx4;
                        let o1i = out[iidx1 - 1];
                        let o1r = out[iidx1];
                        let o2i = out[iidx2 - 1];
                        let o2r = out[iidx2];

                        in_[iidx1 - 1] = o1i + o2i;
                        in_[iidx1] = o1r + o2r;
                        in_[iidx2 - 1] = o1r - o2r;
                        in_[iidx2] = o2i - o1i;
                    }
                    i += 2;
                }
            }
        }
    } else {
        in_[..idl1].copy_from_slice(&out[..idl1]);
    }
    for j in 1..ipph {
        let jc = ip - j;
        let idx1 = j * l1 * ido;
        let idx2 = jc * l1 * ido;
        for k in 0..l1 {
            let idx3 = k * ido + idx1;
            let idx4 = k * ido + idx2;
            let o1r = out[idx3];
            let o2r = out[idx4];

            in_[idx3] = o1r + o2r;
            in_[idx4] = o2r - o1r;
        }
    }

    let mut ar1 = 1f32;
    let mut ai1 = 0f32;
    let idx0 = (ip - 1) * idl1;
    for l in 1..ipph {
        let lc = ip - l;
        let ar1h = dcp * ar1 - dsp * ai1;
        ai1 = dcp * ai1 + dsp * ar1;
        ar1 = ar1h;
        let idx1 = l * idl1;
        let idx2 = lc * idl1;
        for ik in 0..idl1 {
            out[ik + idx1] = in_[ik] + ar1 * in_[ik + idl1];
            out[ik + idx2] = ai1 * in_[ik + idx0];
        }
        let dc2 = ar1;
        let ds2 = ai1;
        let mut ar2 = ar1;
        let mut ai2 = ai1;
        for j in 2..ipph {
            let jc = ip - j;
            let ar2h = dc2 * ar2 - ds2 * ai2;
            ai2 = dc2 * ai2 + ds2 * ar2;
            ar2 = ar2h;
            let idx3 = j * idl1;
            let idx4 = jc * idl1;
            for ik in 0..idl1 {
                out[ik + idx1] += ar2 * in_[ik + idx3];
                out[ik + idx2] += ai2 * in_[ik + idx4];
            }
        }
    }
    for j in 1..ipph {
        let idx1 = j * idl1;
        for ik in 0..idl1 {
            out[ik] += in_[ik + idx1];
        }
    }

    if ido >= l1 {
        for k in 0..l1 {
            let idx1 = k * ido;
            let idx2 = idx1 * ip;
            for i in 0..ido {
                in_[i + idx2] = out[i + idx1];
            }
        }
    } else {
        for i in 0..ido {
            for k in 0..l1 {
                let idx1 = k * ido;
                in_[i + idx1 * ip] = out[i + idx1];
            }
        }
    }
    let idx01 = ip * ido;
    for j in 1..ipph {
        let jc = ip - j;
        let j2 = 2 * j;
        let idx1 = j * l1 * ido;
        let idx2 = jc * l1 * ido;
        let idx3 = j2 * ido;
        for k in 0..l1 {
            let idx4 = k * ido;
            let idx5 = idx4 + idx1;
            let idx6 = idx4 + idx2;
            let idx7 = k * idx01;
            in_[ido - 1 + idx3 - ido + idx7] = out[idx5];
            in_[idx3 + idx7] = out[idx6];
        }
    }
    if ido == 1 {
        return;
    }
    if nbd >= l1 {
        for j in 1..ipph {
            let jc = ip - j;
            let j2 = 2 * j;
            let idx1 = j * l1 * ido;
            let idx2 = jc * l1 * ido;
            let idx3 = j2 * ido;
            for k in 0..l1 {
                let idx4 = k * idx01;
                let idx5 = k * ido;
                let mut i = 2usize;
                while i < ido {
                    let ic = ido - i;
                    let iidx1 = i + idx3 + idx4;
                    let iidx2 = ic + idx3 - ido + idx4;
                    let oidx1 = i + idx5 + idx1;
                    let oidx2 = i + idx5 + idx2;
                    let o1i = out[oidx1 - 1];
                    let o1r = out[oidx1];
                    let o2i = out[oidx2 - 1];
                    let o2r = out[oidx2];

                    in_[iidx1 - 1] = o1i + o2i;
                    in_[iidx2 - 1] = o1i - o2i;
                    in_[iidx1] = o1r + o2r;
                    in_[iidx2] = o2r - o1r;
                    i += 2;
                }
            }
        }
    } else {
        for j in 1..ipph {
            let jc = ip - j;
            let j2 = 2 * j;
            let idx1 = j * l1 * ido;
            let idx2 = jc * l1 * ido;
            let idx3 = j2 * ido;
            let mut i = 2usize;
            while i < ido {
                let ic = ido - i;
                for k in 0..l1 {
                    let idx4 = k * idx01;
                    let idx5 = k * ido;
                    let iidx1 = i + idx3 + idx4;
                    let iidx2 = ic + idx3 - ido + idx4;
                    let oidx1 = i + idx5 + idx1;
                    let oidx2 = i + idx5 + idx2;
                    let o1i = out[oidx1 - 1];
                    let o1r = out[oidx1];
                    let o2i = out[oidx2 - 1];
                    let o2r = out[oidx2];

                    in_[iidx1 - 1] = o1i + o2i;
                    in_[iidx2 - 1] = o1i - o2i;
                    in_[iidx1] = o1r + o2r;
                    in_[iidx2] = o2r - o1r;
                }
                i += 2;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dft::real_forward_reference;
    use crate::RealFft1D;
    use rand::Rng;

    // Primes below the chirp-z cutoff and their products, so every length
    // here runs at least one general-radix pass. 77 and 209 drive two
    // different general factors in one plan.
    #[test]
    fn lengths_with_general_factors() {
        for n in [7usize, 11, 13, 49, 77, 121, 169, 209, 7 * 32] {
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
