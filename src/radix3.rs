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

/// One radix-3 pass of the real forward transform.
pub(crate) fn radf3(ido: usize, l1: usize, in_: &[f32], out: &mut [f32], w: &[f32], offset: usize) {
    const TAUR: f32 = -0.5;
    const TAUI: f32 = 0.866_025_403_784_438_707_610_604_524_234_076_962;

    let iw1 = offset;
    let iw2 = iw1 + ido;

    let idx0 = l1 * ido;
    for k in 0..l1 {
        let idx1 = k * ido;
        let idx3 = 2 * idx0;
        let idx4 = (3 * k + 1) * ido;
        let iidx1 = idx1;
        let iidx2 = iidx1 + idx0;
        let iidx3 = iidx1 + idx3;
        let i1r = in_[iidx1];
        let i2r = in_[iidx2];
        let i3r = in_[iidx3];
        let cr2 = i2r + i3r;
        out[3 * idx1] = i1r + cr2;
        out[idx4 + ido] = TAUI * (i3r - i2r);
        out[ido - 1 + idx4] = i1r + TAUR * cr2;
    }
    if ido == 1 {
        return;
    }
    for k in 0..l1 {
        let idx3 = k * ido;
        let idx4 = 3 * idx3;
        let idx5 = idx3 + idx0;
        let idx6 = idx5 + idx0;
        let idx7 = idx4 + ido;
        let idx8 = idx7 + ido;
        let mut i = 2usize;
        while i < ido {
            let ic = ido - i;
            let widx1 = i - 1 + iw1;
            let widx2 = i - 1 + iw2;

            let w1r = w[widx1 - 1];
            let w1i = w[widx1];
            let w2r = w[widx2 - 1];
            let w2i = w[widx2];

            let iidx1 = i + idx3;
            let iidx2 = i + idx5;
            let iidx3 = i + idx6;

            let i1i = in_[iidx1 - 1];
            let i1r = in_[iidx1];
            let i2i = in_[iidx2 - 1];
            let i2r = in_[iidx2];
            let i3i = in_[iidx3 - 1];
            let i3r = in_[iidx3];

            let dr2 = w1r * i2i + w1i * i2r;
            let di2 = w1r * i2r - w1i * i2i;
            let dr3 = w2r * i3i + w2i * i3r;
            let di3 = w2r * i3r - w2i * i3i;
            let cr2 = dr2 + dr3;
            let ci2 = di2 + di3;
            let tr2 = i1i + TAUR * cr2;
            let ti2 = i1r + TAUR * ci2;
            let tr3 = TAUI * (di2 - di3);
            let ti3 = TAUI * (dr3 - dr2);

            let oidx1 = i + idx4;
            let oidx2 = ic + idx7;
            let oidx3 = i + idx8;

            out[oidx1 - 1] = i1i + cr2;
            out[oidx1] = i1r + ci2;
            out[oidx2 - 1] = tr2 - tr3;
            out[oidx2] = ti3 - ti2;
            out[oidx3 - 1] = tr2 + tr3;
            out[oidx3] = ti2 + ti3;
            i += 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dft::real_forward_reference;
    use crate::RealFft1D;
    use rand::Rng;

    #[test]
    fn lengths_dominated_by_radix3() {
        for n in [3usize, 9, 27, 3 * 5, 9 * 25] {
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
