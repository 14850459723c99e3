//! Vincenty inverse solution on the WGS84 ellipsoid.
//!
//! Computes the geodesic distance and the initial (forward) azimuth
//! between two positions. The iteration solves for the difference in
//! longitude on the auxiliary sphere; it is undefined for coincident
//! endpoints and may fail to converge for nearly antipodal ones - both are
//! reported as errors rather than returning garbage.

use crate::error::{GeodesyError, GeodesyResult};
use crate::position::Position;

/// WGS84 semi-major axis in meters.
const SEMI_MAJOR_M: f64 = 6_378_137.0;
/// WGS84 flattening.
const FLATTENING: f64 = 1.0 / 298.257_223_563;
/// WGS84 semi-minor axis in meters.
const SEMI_MINOR_M: f64 = 6_356_752.314_245_18;

/// One nautical mile in meters.
const METERS_PER_NM: f64 = 1852.0;

const MAX_ITERATIONS: u32 = 200;
const CONVERGENCE_THRESHOLD: f64 = 1e-12;

/// Result of the inverse geodesic solution.
#[derive(Debug, Clone, Copy)]
struct Inverse {
    distance_m: f64,
    forward_azimuth_deg: f64,
}

/// Geodesic distance between two positions, in nautical miles.
pub fn distance_nm(a: &Position, b: &Position) -> GeodesyResult<f64> {
    Ok(inverse(a, b)?.distance_m / METERS_PER_NM)
}

/// Initial compass bearing from `a` toward `b`, in degrees [0, 360).
pub fn initial_bearing(a: &Position, b: &Position) -> GeodesyResult<f64> {
    Ok(inverse(a, b)?.forward_azimuth_deg)
}

fn inverse(a: &Position, b: &Position) -> GeodesyResult<Inverse> {
    if a == b {
        return Err(GeodesyError::DegenerateInput);
    }

    let phi1 = a.latitude().to_radians();
    let phi2 = b.latitude().to_radians();
    let l = (b.longitude() - a.longitude()).to_radians();

    // Reduced latitudes on the auxiliary sphere.
    let u1 = ((1.0 - FLATTENING) * phi1.tan()).atan();
    let u2 = ((1.0 - FLATTENING) * phi2.tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut iterations = 0;

    let (sin_sigma, cos_sigma, sigma, sin_lambda, cos_lambda, cos_sq_alpha, cos_2sigma_m) = loop {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            // Coincident on the auxiliary sphere.
            return Err(GeodesyError::DegenerateInput);
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);

        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

        // Equatorial lines have cos^2(alpha) = 0.
        let cos_2sigma_m = if cos_sq_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        };

        let c = FLATTENING / 16.0 * cos_sq_alpha * (4.0 + FLATTENING * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * FLATTENING
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));

        if (lambda - lambda_prev).abs() < CONVERGENCE_THRESHOLD {
            break (
                sin_sigma,
                cos_sigma,
                sigma,
                sin_lambda,
                cos_lambda,
                cos_sq_alpha,
                cos_2sigma_m,
            );
        }

        iterations += 1;
        if iterations >= MAX_ITERATIONS {
            return Err(GeodesyError::NoConvergence);
        }
    };

    let u_sq =
        cos_sq_alpha * (SEMI_MAJOR_M.powi(2) - SEMI_MINOR_M.powi(2)) / SEMI_MINOR_M.powi(2);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma.powi(2))
                        * (-3.0 + 4.0 * cos_2sigma_m.powi(2))));

    let distance_m = SEMI_MINOR_M * big_a * (sigma - delta_sigma);

    let alpha1 = (cos_u2 * sin_lambda).atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);
    let forward_azimuth_deg = alpha1.to_degrees().rem_euclid(360.0);

    Ok(Inverse {
        distance_m,
        forward_azimuth_deg,
    })
}
