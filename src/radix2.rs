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

/// One radix-2 pass of the real forward transform.
///
/// `l1` input blocks of `ido` samples are combined into pairs of output
/// blocks; the second block of each pair is written with reversed inner
/// index (`ic = ido - i`) so conjugate bins land next to each other. `w`
/// is read at `offset` with cos on the lower index of each pair.
pub(crate) fn radf2(ido: usize, l1: usize, in_: &[f32], out: &mut [f32], w: &[f32], offset: usize) {
    let iw1 = offset;
    let idx0 = l1 * ido;
    let t2 = 2 * ido;
    for k in 0..l1 {
        let oidx1 = k * t2;
        let oidx2 = oidx1 + t2 - 1;
        let iidx1 = k * ido;
        let iidx2 = iidx1 + idx0;

        let i1r = in_[iidx1];
        let i2r = in_[iidx2];

        out[oidx1] = i1r + i2r;
        out[oidx2] = i1r - i2r;
    }
    if ido < 2 {
        return;
    }
    if ido != 2 {
        for k in 0..l1 {
            let idx1 = k * ido;
            let idx2 = 2 * idx1;
            let idx3 = idx2 + ido;
            let idx4 = idx1 + idx0;
            let mut i = 2usize;
            while i < ido {
                let ic = ido - i;
                let widx1 = i - 1 + iw1;
                let oidx1 = i + idx2;
                let oidx2 = ic + idx3;
                let iidx1 = i + idx1;
                let iidx2 = i + idx4;

                let a1i = in_[iidx1 - 1];
                let a1r = in_[iidx1];
                let a2i = in_[iidx2 - 1];
                let a2r = in_[iidx2];

                let w1r = w[widx1 - 1];
                let w1i = w[widx1];

                let t1r = w1r * a2i + w1i * a2r;
                let t1i = w1r * a2r - w1i * a2i;

                out[oidx1] = a1r + t1i;
                out[oidx1 - 1] = a1i + t1r;

                out[oidx2] = t1i - a1r;
                out[oidx2 - 1] = a1i - t1r;
                i += 2;
            }
        }
        if !ido.is_multiple_of(2) {
            return;
        }
    }
    for k in 0..l1 {
        let idx1 = k * ido;
        let idx2 = 2 * idx1;
        let oidx1 = idx2 + ido;
        let iidx1 = ido - 1 + idx1;

        out[oidx1] = -in_[iidx1 + idx0];
        out[oidx1 - 1] = in_[iidx1];
    }
}

#[cfg(test)]
mod tests {
    use crate::dft::real_forward_reference;
    use crate::RealFft1D;
    use rand::Rng;

    // 6 ends on a radix-2 pass with ido == 3, 24 on ido == 12 which also
    // drives the even tail.
    #[test]
    fn lengths_ending_in_a_radix2_pass() {
        for n in [2usize * 3, 2 * 5, 8 * 3, 2 * 3 * 5 * 7] {
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
