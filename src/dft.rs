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
use num_complex::Complex;

/// O(n^2) reference for the packed half spectrum, accumulated in double
/// precision with the negative-exponent convention.
pub(crate) fn real_forward_reference(input: &[f32]) -> Vec<f32> {
    let n = input.len();
    let mut spectrum = Vec::with_capacity(n / 2 + 1);
    for k in 0..=n / 2 {
        let mut sum = Complex::<f64>::new(0.0, 0.0);
        for (m, &x) in input.iter().enumerate() {
            let ang = -2.0 * std::f64::consts::PI * ((k * m) % n) as f64 / n as f64;
            sum += Complex::new(ang.cos(), ang.sin()) * x as f64;
        }
        spectrum.push(sum);
    }

    let mut packed = vec![0f32; n];
    packed[0] = spectrum[0].re as f32;
    if n == 1 {
        return packed;
    }
    if n % 2 == 0 {
        packed[1] = spectrum[n / 2].re as f32;
        for k in 1..n / 2 {
            packed[2 * k] = spectrum[k].re as f32;
            packed[2 * k + 1] = spectrum[k].im as f32;
        }
    } else {
        packed[1] = spectrum[(n - 1) / 2].im as f32;
        for k in 1..=(n - 1) / 2 {
            packed[2 * k] = spectrum[k].re as f32;
            if 2 * k + 1 < n {
                packed[2 * k + 1] = spectrum[k].im as f32;
            }
        }
    }
    packed
}
