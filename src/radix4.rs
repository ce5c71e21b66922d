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

/// One radix-4 pass of the real forward transform. The even-`ido` tail
/// folds the leftover pair with `hsqt2`.
pub(crate) fn radf4(ido: usize, l1: usize, in_: &[f32], out: &mut [f32], w: &[f32], offset: usize) {
    const HSQT2: f32 = 0.707_106_781_186_547_572_737_310_929_369_414_225;

    let iw1 = offset;
    let iw2 = offset + ido;
    let iw3 = iw2 + ido;
    let idx0 = l1 * ido;
    for k in 0..l1 {
        let idx1 = k * ido;
        let idx2 = 4 * idx1;
        let idx3 = idx1 + idx0;
        let idx4 = idx3 + idx0;
        let idx5 = idx4 + idx0;
        let idx6 = idx2 + ido;
        let i1r = in_[idx1];
        let i2r = in_[idx3];
        let i3r = in_[idx4];
        let i4r = in_[idx5];

        let tr1 = i2r + i4r;
        let tr2 = i1r + i3r;

        let oidx1 = idx2;
        let oidx2 = idx6 + ido;

        out[oidx1] = tr1 + tr2;
        out[oidx2 - 1 + ido + ido] = tr2 - tr1;
        out[oidx2 - 1] = i1r - i3r;
        out[oidx2] = i4r - i2r;
    }
    if ido < 2 {
        return;
    }
    if ido != 2 {
        for k in 0..l1 {
            let idx1 = k * ido;
            let idx2 = idx1 + idx0;
            let idx3 = idx2 + idx0;
            let idx4 = idx3 + idx0;
            let idx5 = 4 * idx1;
            let idx6 = idx5 + ido;
            let idx7 = idx6 + ido;
            let idx8 = idx7 + ido;
            let mut i = 2usize;
            while i < ido {
                let ic = ido - i;
                let widx1 = i - 1 + iw1;
                let widx2 = i - 1 + iw2;
                let widx3 = i - 1 + iw3;
                let w1r = w[widx1 - 1];
                let w1i = w[widx1];
                let w2r = w[widx2 - 1];
                let w2i = w[widx2];
                let w3r = w[widx3 - 1];
                let w3i = w[widx3];

                let iidx1 = i + idx1;
                let iidx2 = i + idx2;
                let iidx3 = i + idx3;
                let iidx4 = i + idx4;

                let i1i = in_[iidx1 - 1];
                let i1r = in_[iidx1];
                let i2i = in_[iidx2 - 1];
                let i2r = in_[iidx2];
                let i3i = in_[iidx3 - 1];
                let i3r = in_[iidx3];
                let i4i = in_[iidx4 - 1];
                let i4r = in_[iidx4];

                let cr2 = w1r * i2i + w1i * i2r;
                let ci2 = w1r * i2r - w1i * i2i;
                let cr3 = w2r * i3i + w2i * i3r;
                let ci3 = w2r * i3r - w2i * i3i;
                let cr4 = w3r * i4i + w3i * i4r;
                let ci4 = w3r * i4r - w3i * i4i;
                let tr1 = cr2 + cr4;
                let tr4 = cr4 - cr2;
                let ti1 = ci2 + ci4;
                let ti4 = ci2 - ci4;
                let ti2 = i1r + ci3;
                let ti3 = i1r - ci3;
                let tr2 = i1i + cr3;
                let tr3 = i1i - cr3;

                let oidx1 = i + idx5;
                let oidx2 = ic + idx6;
                let oidx3 = i + idx7;
                let oidx4 = ic + idx8;

                out[oidx1 - 1] = tr1 + tr2;
                out[oidx4 - 1] = tr2 - tr1;
                out[oidx1] = ti1 + ti2;
                out[oidx4] = ti1 - ti2;
                out[oidx3 - 1] = ti4 + tr3;
                out[oidx2 - 1] = tr3 - ti4;
                out[oidx3] = tr4 + ti3;
                out[oidx2] = tr4 - ti3;
                i += 2;
            }
        }
        if !ido.is_multiple_of(2) {
            return;
        }
    }
    for k in 0..l1 {
        let idx1 = k * ido;
        let idx2 = 4 * idx1;
        let idx3 = idx1 + idx0;
        let idx4 = idx3 + idx0;
        let idx5 = idx4 + idx0;
        let idx6 = idx2 + ido;
        let idx7 = idx6 + ido;
        let idx8 = idx7 + ido;

        let i1i = in_[ido - 1 + idx1];
        let i2i = in_[ido - 1 + idx3];
        let i3i = in_[ido - 1 + idx4];
        let i4i = in_[ido - 1 + idx5];

        let ti1 = -HSQT2 * (i2i + i4i);
        let tr1 = HSQT2 * (i2i - i4i);

        out[ido - 1 + idx2] = tr1 + i1i;
        out[ido - 1 + idx7] = i1i - tr1;
        out[idx6] = ti1 - i3i;
        out[idx8] = ti1 + i3i;
    }
}

#[cfg(test)]
mod tests {
    use crate::dft::real_forward_reference;
    use crate::RealFft1D;
    use rand::Rng;

    // 48 ends on a radix-4 pass with ido == 12 so the hsqt2 tail runs;
    // 12 and 80 cover the odd-ido middle loop.
    #[test]
    fn lengths_dominated_by_radix4() {
        for n in [12usize, 48, 80, 144] {
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
