// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Gaussian smoothing of a regularly-sampled signal via real-valued FFTs.

use realfft::{FftError, RealFftPlanner};

use crate::constants::KERNEL_HALF_WIDTH_SIGMAS;

/// Kernels whose tails would be folded (see [gaussian_kernel]) may not have
/// more than this many taps on each side.
pub(crate) const MAX_FOLDED_KERNEL_HALF_WIDTH: usize = 1 << 22;

/// The half width of a Gaussian kernel with standard deviation `sigma`
/// \[samples\]: `ceil(4 sigma)`, and at least 1. Saturates for huge or
/// infinite `sigma`.
pub(crate) fn kernel_half_width(sigma: f64) -> usize {
    ((KERNEL_HALF_WIDTH_SIGMAS * sigma).ceil() as usize).max(1)
}

/// A Gaussian kernel with standard deviation `sigma` \[samples\], sampled at
/// the integer offsets -h..=h and normalised to unit sum, so the kernel length
/// is always odd.
///
/// The kernel is cut at `max_half_width` taps either side of the centre, with
/// the weight of everything beyond added to the two end taps. With extended
/// edges, a signal of n samples only ever reads edge values past n - 1 taps,
/// so a kernel cut at n - 1 gives the same convolution as the full one.
pub(crate) fn gaussian_kernel(sigma: f64, max_half_width: usize) -> Vec<f64> {
    let full_half_width = kernel_half_width(sigma);
    let half_width = full_half_width.min(max_half_width.max(1));
    let weight = |offset: usize| {
        let x = offset as f64 / sigma;
        (-0.5 * x * x).exp()
    };

    let mut kernel: Vec<f64> = (0..=2 * half_width)
        .map(|i| weight(i.abs_diff(half_width)))
        .collect();
    if full_half_width > half_width {
        let tail: f64 = (half_width + 1..=full_half_width).map(weight).sum();
        kernel[0] += tail;
        kernel[2 * half_width] += tail;
    }

    let sum: f64 = kernel.iter().sum();
    kernel.iter_mut().for_each(|k| *k /= sum);
    kernel
}

/// Convolve `signal` with an odd-length, centred `kernel`. Samples beyond
/// either end of `signal` take the value of the nearest edge sample. The
/// output has the same length as `signal`.
///
/// The signal is extended by half a kernel on both sides, then zero padded to
/// a power-of-two length that is long enough for the circular convolution
/// computed by the FFT to equal the linear convolution.
pub(crate) fn convolve_extend(signal: &[f64], kernel: &[f64]) -> Result<Vec<f64>, FftError> {
    debug_assert!(!signal.is_empty());
    debug_assert_eq!(kernel.len() % 2, 1);

    let n = signal.len();
    let m = kernel.len();
    let half_width = m / 2;
    let extended_len = n + 2 * half_width;
    let fft_len = (extended_len + m - 1).next_power_of_two();

    let mut planner = RealFftPlanner::<f64>::new();
    let r2c = planner.plan_fft_forward(fft_len);
    let c2r = planner.plan_fft_inverse(fft_len);

    let mut extended = r2c.make_input_vec();
    extended[..half_width].fill(signal[0]);
    extended[half_width..half_width + n].copy_from_slice(signal);
    extended[half_width + n..extended_len].fill(signal[n - 1]);

    let mut padded_kernel = r2c.make_input_vec();
    padded_kernel[..m].copy_from_slice(kernel);

    let mut signal_spectrum = r2c.make_output_vec();
    let mut kernel_spectrum = r2c.make_output_vec();
    r2c.process(&mut extended, &mut signal_spectrum)?;
    r2c.process(&mut padded_kernel, &mut kernel_spectrum)?;

    for (s, k) in signal_spectrum.iter_mut().zip(kernel_spectrum.iter()) {
        *s = *s * *k;
    }
    // The inverse transform requires purely real DC and Nyquist terms.
    if let Some(dc) = signal_spectrum.first_mut() {
        dc.im = 0.0;
    }
    if let Some(nyquist) = signal_spectrum.last_mut() {
        nyquist.im = 0.0;
    }

    let mut full = c2r.make_output_vec();
    c2r.process(&mut signal_spectrum, &mut full)?;

    // realfft doesn't normalise. Output sample i of the extended signal's
    // centre sits at index i + 2h of the full linear convolution.
    let norm = fft_len as f64;
    Ok(full[2 * half_width..2 * half_width + n]
        .iter()
        .map(|v| v / norm)
        .collect())
}
