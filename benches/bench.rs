// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::*;

use spectools_ir::{convolve, mrs_resolving_power, ConvolutionPlan};

/// A MIRI-like spectrum of narrow emission lines on a flat continuum.
fn make_spectrum(num_samples: usize) -> (Vec<f64>, Vec<f64>) {
    let wave: Vec<f64> = (0..num_samples)
        .map(|i| 4.95 + 0.7 * i as f64 / num_samples as f64)
        .collect();
    let flux = wave
        .iter()
        .map(|&w| {
            1.0 + (0..20)
                .map(|i| {
                    let centre = 5.0 + 0.03 * i as f64;
                    (-0.5 * ((w - centre) / 2e-4).powi(2)).exp()
                })
                .sum::<f64>()
        })
        .collect();
    (wave, flux)
}

fn convolution(c: &mut Criterion) {
    let (wave, flux) = make_spectrum(100_000);

    c.bench_function("convolve constant R", |b| {
        b.iter(|| convolve(black_box(&wave), black_box(&flux), 3000.0).unwrap())
    });

    let r = mrs_resolving_power(&wave).unwrap();
    c.bench_function("convolve MIRI MRS R", |b| {
        b.iter(|| convolve(black_box(&wave), black_box(&flux), &r).unwrap())
    });

    let plan = ConvolutionPlan::new(&wave, &r).unwrap();
    c.bench_function("apply convolution plan", |b| {
        b.iter(|| plan.apply(black_box(&flux)).unwrap())
    });
}

criterion_group!(benches, convolution);
criterion_main!(benches);
