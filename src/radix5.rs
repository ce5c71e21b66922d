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

/// One radix-5 pass of the real forward transform.
pub(crate) fn radf5(ido: usize, l1: usize, in_: &[f32], out: &mut [f32], w: &[f32], offset: usize) {
    // cos/sin of 2*pi/5 and 4*pi/5
    const TR11: f32 = 0.309_016_994_374_947_451_262_869_435_595_348_477;
    const TI11: f32 = 0.951_056_516_295_153_531_181_938_433_292_089_030;
    const TR12: f32 = -0.809_016_994_374_947_340_240_566_973_079_694_435;
    const TI12: f32 = 0.587_785_252_292_473_248_125_759_255_344_746_634;

    let iw1 = offset;
    let iw2 = iw1 + ido;
    let iw3 = iw2 + ido;
    let iw4 = iw3 + ido;

    let idx0 = l1 * ido;
    for k in 0..l1 {
        let idx1 = k * ido;
        let idx2 = 5 * idx1;
        let idx3 = idx2 + ido;
        let idx4 = idx3 + ido;
        let idx5 = idx4 + ido;
        let idx6 = idx5 + ido;
        let idx7 = idx1 + idx0;
        let idx8 = idx7 + idx0;
        let idx9 = idx8 + idx0;
        let idx10 = idx9 + idx0;
        let idx11 = ido - 1;

        let i1r = in_[idx1];
        let i2r = in_[idx7];
        let i3r = in_[idx8];
        let i4r = in_[idx9];
        let i5r = in_[idx10];

        let cr2 = i5r + i2r;
        let ci5 = i5r - i2r;
        let cr3 = i4r + i3r;
        let ci4 = i4r - i3r;

        out[idx2] = i1r + cr2 + cr3;
        out[idx11 + idx3] = i1r + TR11 * cr2 + TR12 * cr3;
        out[idx4] = TI11 * ci5 + TI12 * ci4;
        out[idx11 + idx5] = i1r + TR12 * cr2 + TR11 * cr3;
        out[idx6] = TI12 * ci5 - TI11 * ci4;
    }
    if ido == 1 {
        return;
    }
    for k in 0..l1 {
        let idx1 = k * ido;
        let idx2 = 5 * idx1;
        let idx3 = idx2 + ido;
        let idx4 = idx3 + ido;
        let idx5 = idx4 + ido;
        let idx6 = idx5 + ido;
        let idx7 = idx1 + idx0;
        let idx8 = idx7 + idx0;
        let idx9 = idx8 + idx0;
        let idx10 = idx9 + idx0;
        let mut i = 2usize;
        while i < ido {
            let widx1 = i - 1 + iw1;
            let widx2 = i - 1 + iw2;
            let widx3 = i - 1 + iw3;
            let widx4 = i - 1 + iw4;
            let w1r = w[widx1 - 1];
            let w1i = w[widx1];
            let w2r = w[widx2 - 1];
            let w2i = w[widx2];
            let w3r = w[widx3 - 1];
            let w3i = w[widx3];
            let w4r = w[widx4 - 1];
            let w4i = w[widx4];

            let ic = ido - i;

            let iidx1 = i + idx1;
            let iidx2 = i + idx7;
            let iidx3 = i + idx8;
            let iidx4 = i + idx9;
            let iidx5 = i + idx10;

            let i1i = in_[iidx1 - 1];
            let i1r = in_[iidx1];
            let i2i = in_[iidx2 - 1];
            let i2r = in_[iidx2];
            let i3i = in_[iidx3 - 1];
            let i3r = in_[iidx3];
            let i4i = in_[iidx4 - 1];
            let i4r = in_[iidx4];
            let i5i = in_[iidx5 - 1];
            let i5r = in_[iidx5];

            let dr2 = w1r * i2i + w1i * i2r;
            let di2 = w1r * i2r - w1i * i2i;
            let dr3 = w2r * i3i + w2i * i3r;
            let di3 = w2r * i3r - w2i * i3i;
            let dr4 = w3r * i4i + w3i * i4r;
            let di4 = w3r * i4r - w3i * i4i;
            let dr5 = w4r * i5i + w4i * i5r;
            let di5 = w4r * i5r - w4i * i5i;

            let cr2 = dr2 + dr5;
            let ci5 = dr5 - dr2;
            let cr5 = di2 - di5;
            let ci2 = di2 + di5;
            let cr3 = dr3 + dr4;
            let ci4 = dr4 - dr3;
            let cr4 = di3 - di4;
            let ci3 = di3 + di4;

            let tr2 = i1i + TR11 * cr2 + TR12 * cr3;
            let ti2 = i1r + TR11 * ci2 + TR12 * ci3;
            let tr3 = i1i + TR12 * cr2 + TR11 * cr3;
            let ti3 = i1r + TR12 * ci2 + TR11 * ci3;
            let tr5 = TI11 * cr5 + TI12 * cr4;
            let ti5 = TI11 * ci5 + TI12 * ci4;
            let tr4 = TI12 * cr5 - TI11 * cr4;
            let ti4 = TI12 * ci5 - TI11 * ci4;

            let oidx1 = i + idx2;
            let oidx2 = ic + idx3;
            let oidx3 = i + idx4;
            let oidx4 = ic + idx5;
            let oidx5 = i + idx6;

            out[oidx1 - 1] = i1i + cr2 + cr3;
            out[oidx1] = i1r + ci2 + ci3;
            out[oidx3 - 1] = tr2 + tr5;
            out[oidx2 - 1] = tr2 - tr5;
            out[oidx3] = ti2 + ti5;
            out[oidx2] = ti5 - ti2;
            out[oidx5 - 1] = tr3 + tr4;
            out[oidx4 - 1] = tr3 - tr4;
            out[oidx5] = ti3 + ti4;
            out[oidx4] = ti4 - ti3;
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
    fn lengths_dominated_by_radix5() {
        for n in [5usize, 25, 125, 5 * 9, 20] {
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
