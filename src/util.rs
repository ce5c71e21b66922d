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
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Reduces `n` by the ordered trial divisors {4, 2, 3, 5} and returns
/// whatever is left standing.
///
/// A residual of 1 means the length is fully covered by the specialized
/// radix kernels; a large residual means a general-radix or chirp-z pass
/// would have to carry it.
pub(crate) fn residual_factor(n: usize) -> usize {
    let mut rem = n;
    for f in [4usize, 2, 3, 5] {
        while rem.is_multiple_of(f) {
            rem /= f;
        }
    }
    rem
}

/// (cos, sin) of `angle`, computed in double precision and narrowed.
///
/// All trigonometric tables are built through this so single precision is
/// only entered once, at the final store.
#[inline]
pub(crate) fn unit_phase(angle: f64) -> Complex<f32> {
    Complex {
        re: angle.cos().as_(),
        im: angle.sin().as_(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residual_of_smooth_lengths() {
        assert_eq!(residual_factor(1), 1);
        assert_eq!(residual_factor(4), 1);
        assert_eq!(residual_factor(6), 1);
        assert_eq!(residual_factor(120), 1);
        assert_eq!(residual_factor(1000), 1);
    }

    #[test]
    fn residual_keeps_rough_part() {
        assert_eq!(residual_factor(7), 7);
        assert_eq!(residual_factor(14), 7);
        assert_eq!(residual_factor(211), 211);
        assert_eq!(residual_factor(422), 211);
        assert_eq!(residual_factor(2 * 3 * 5 * 47), 47);
    }

    #[test]
    fn unit_phase_quadrants() {
        let q = unit_phase(std::f64::consts::FRAC_PI_2);
        assert!(q.re.abs() < 1e-7);
        assert!((q.im - 1.0).abs() < 1e-7);
        let h = unit_phase(std::f64::consts::PI);
        assert!((h.re + 1.0).abs() < 1e-7);
        assert!(h.im.abs() < 1e-6);
    }
}
