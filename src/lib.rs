//! Elementary vector algebra behind the `vector-*` command-line utilities.

pub mod cli;
pub mod commands;
pub mod error;
pub mod parse;

pub use error::{Result, VectorError};

pub mod library {
    use crate::error::{Result, VectorError};
    use crate::parse::Component;

    pub fn dot(vec1: &[f64], vec2: &[f64]) -> Result<f64> {
        if vec1.len() != vec2.len() {
            return Err(VectorError::LengthMismatch);
        }
        Ok(vec1.iter().zip(vec2).fold(0.0, |acc, (a, b)| acc + a * b))
    }

    fn largest_component(vec: &[f64]) -> f64 {
        vec.iter().fold(0.0, |acc: f64, c| acc.max(c.abs()))
    }

    /// Divides every component by the largest one so squaring cannot overflow.
    fn rescale(vec: &[f64]) -> Vec<f64> {
        let scale = largest_component(vec);
        if scale == 0.0 || !scale.is_finite() {
            return vec.to_vec();
        }
        vec.iter().map(|c| c / scale).collect()
    }

    pub fn get_magnitude(vec: &[f64]) -> f64 {
        let scale = largest_component(vec);
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }
        scale * vec.iter().fold(0.0, |acc, c| acc + (c / scale).powf(2.0)).sqrt()
    }

    /// Sum over positions of the product of that position across every vector.
    ///
    /// With two vectors this is the ordinary dot product.
    pub fn cumulative_product(vectors: &[Vec<f64>]) -> Result<f64> {
        let Some(first) = vectors.first() else {
            return Err(VectorError::NoVectors);
        };
        if vectors.iter().any(|vec| vec.len() != first.len()) {
            return Err(VectorError::LengthMismatch);
        }
        Ok((0..first.len()).fold(0.0, |acc, i| {
            acc + vectors.iter().map(|vec| vec[i]).product::<f64>()
        }))
    }

    pub fn cross(u: &[f64], v: &[f64]) -> Result<[f64; 3]> {
        let (&[u0, u1, u2], &[v0, v1, v2]) = (u, v) else {
            return Err(VectorError::NotThreeDimensional);
        };
        Ok([u1 * v2 - v1 * u2, u2 * v0 - v2 * u0, u0 * v1 - v0 * u1])
    }

    /// Angle between `u` and `v` in degrees, in `[0, 180]`.
    pub fn angle_between(u: &[f64], v: &[f64]) -> Result<f64> {
        if u.len() != v.len() {
            return Err(VectorError::LengthMismatch);
        }
        // The angle does not depend on length, so work on rescaled copies.
        let (u, v) = (rescale(u), rescale(v));
        let dot_prod = dot(&u, &v)?;
        let mag_u = get_magnitude(&u);
        let mag_v = get_magnitude(&v);
        if mag_u == 0.0 || mag_v == 0.0 {
            return Err(VectorError::ZeroMagnitude);
        }
        // Rounding can push the cosine just outside acos's domain.
        let cos_theta = (dot_prod / (mag_u * mag_v)).clamp(-1.0, 1.0);
        Ok(cos_theta.acos().to_degrees())
    }

    /// Vector projection of `u` onto `v`.
    pub fn project(u: &[f64], v: &[f64]) -> Result<Vec<f64>> {
        if u.len() != v.len() {
            return Err(VectorError::LengthMismatch);
        }
        let w = rescale(v);
        let dot_prod = dot(u, &w)?;
        let mag_w_squared = dot(&w, &w)?;
        if mag_w_squared == 0.0 {
            return Err(VectorError::ZeroVector);
        }
        let scalar = dot_prod / mag_w_squared;
        let projection: Vec<f64> = w.iter().map(|c| scalar * c).collect();
        if projection.iter().any(|c| c.is_infinite()) {
            return Err(VectorError::NotFinite);
        }
        Ok(projection)
    }

    /// Value the single `Unknown` in `u` or `v` must take for `u · v == 0`.
    pub fn solve_orthogonal(u: &[Component], v: &[Component]) -> Result<f64> {
        if u.len() != v.len() {
            return Err(VectorError::LengthMismatch);
        }
        let unknowns = u
            .iter()
            .chain(v)
            .filter(|c| **c == Component::Unknown)
            .count();
        match unknowns {
            0 => return Err(VectorError::MissingPlaceholder),
            1 => {}
            n => return Err(VectorError::MultiplePlaceholders(n)),
        }

        let mut known_sum = 0.0;
        let mut counterpart = None;
        for (a, b) in u.iter().zip(v) {
            match (a.known(), b.known()) {
                (Some(a), Some(b)) => known_sum += a * b,
                (None, Some(other)) | (Some(other), None) => counterpart = Some(other),
                (None, None) => return Err(VectorError::MultiplePlaceholders(2)),
            }
        }
        let counterpart = counterpart.ok_or(VectorError::MissingPlaceholder)?;
        if counterpart == 0.0 {
            return Err(VectorError::ZeroCounterpart);
        }
        Ok(-known_sum / counterpart)
    }

}
