//! One evaluator per utility: parse the input, apply the formula, and build
//! the line that gets printed.

use crate::error::Result;
use crate::library::*;
use crate::parse::{
    format_vector, parse_components, parse_halves, parse_placeholder_halves,
    parse_semicolon_vectors, parse_triples, parse_vector_pair,
};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utility {
    Magnitude,
    Product,
    Cross,
    Angle,
    Projection,
    Orthogonal,
}

impl Utility {
    pub const ALL: [Utility; 6] = [
        Utility::Magnitude,
        Utility::Product,
        Utility::Cross,
        Utility::Angle,
        Utility::Projection,
        Utility::Orthogonal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Utility::Magnitude => "magnitude",
            Utility::Product => "product",
            Utility::Cross => "cross",
            Utility::Angle => "angle",
            Utility::Projection => "projection",
            Utility::Orthogonal => "orthogonal",
        }
    }

    /// Instruction shown when no arguments were given.
    ///
    /// The magnitude prompt sits on the same line as the answer; the others
    /// are followed by a newline.
    pub fn prompt(self) -> &'static str {
        match self {
            Utility::Magnitude => {
                "Enter vector components separated by spaces (or type 'exit' to quit): "
            }
            Utility::Product => {
                "Enter vectors separated by semicolons, with components separated by spaces:"
            }
            Utility::Cross => {
                "Enter the vector components separated by spaces (first 3 components are vector_u, next 3 components are vector_v):"
            }
            Utility::Angle => {
                "Enter two vectors separated by a semicolon, with components separated by spaces:"
            }
            Utility::Projection => {
                "Enter the vector components separated by spaces (first half is vector_u, second half is vector_v):"
            }
            Utility::Orthogonal => {
                "Enter the vector components separated by spaces (first half is vector_u, second half is vector_v, use 'x' for the missing component in either vector):"
            }
        }
    }

    pub fn evaluate(self, input: &str) -> Result<String> {
        debug!("evaluating {} on {:?}", self.name(), input);
        match self {
            Utility::Magnitude => {
                let vec = parse_components(input)?;
                let magnitude = get_magnitude(&vec);
                Ok(format!(
                    "The magnitude of the vector {} is {magnitude:?}",
                    format_vector(&vec)
                ))
            }
            Utility::Product => {
                let vectors = parse_semicolon_vectors(input)?;
                let result = cumulative_product(&vectors)?;
                Ok(format!("The cumulative dot product of the vectors is {result:?}"))
            }
            Utility::Cross => {
                let (u, v) = parse_triples(input)?;
                let cross_prod = cross(&u, &v)?;
                Ok(format!(
                    "The cross product of vector_u and vector_v is {}",
                    format_vector(&cross_prod)
                ))
            }
            Utility::Angle => {
                let (u, v) = parse_vector_pair(input)?;
                let angle = angle_between(&u, &v)?;
                Ok(format!(
                    "The angle between the vectors {} and {} is {} degrees",
                    format_vector(&u),
                    format_vector(&v),
                    two_decimals(angle)
                ))
            }
            Utility::Projection => {
                let (u, v) = parse_halves(input)?;
                let projection = project(&u, &v)?;
                Ok(format!(
                    "The vector projection of vector_u onto vector_v is {}",
                    format_vector(&projection)
                ))
            }
            Utility::Orthogonal => {
                let (u, v) = parse_placeholder_halves(input)?;
                let x_value = solve_orthogonal(&u, &v)?;
                Ok(format!(
                    "The value of the missing component 'x' is {}",
                    two_decimals(x_value)
                ))
            }
        }
    }
}

/// Two decimals, dropping the sign when the rounded value is zero.
fn two_decimals(value: f64) -> String {
    let text = format!("{value:.2}");
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}
