//! Turning raw input text into vectors.
//!
//! Three input shapes are in use: a plain whitespace-separated list, vectors
//! separated by `;`, and one flat list cut positionally in half. The
//! orthogonality solver additionally accepts `x` in place of a number.

use crate::error::{Result, VectorError};

/// Separator between vectors in the semicolon form.
pub const VECTOR_SEPARATOR: char = ';';

/// One entry of a vector that may contain an unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component {
    Known(f64),
    Unknown,
}

impl Component {
    pub fn parse(token: &str) -> Result<Component> {
        if token.eq_ignore_ascii_case("x") {
            return Ok(Component::Unknown);
        }
        token
            .parse::<f64>()
            .map(Component::Known)
            .map_err(|_| VectorError::InvalidComponent(token.to_string()))
    }

    pub fn known(&self) -> Option<f64> {
        match self {
            Component::Known(value) => Some(*value),
            Component::Unknown => None,
        }
    }
}

fn parse_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Vec<f64>> {
    tokens
        .into_iter()
        .map(|token| token.parse::<f64>().map_err(|_| VectorError::NotNumeric))
        .collect()
}

pub fn parse_components(input: &str) -> Result<Vec<f64>> {
    parse_tokens(input.split_whitespace())
}

/// Parses `"1 2 3; 4 5 6"` into one vector per `;`-separated piece.
///
/// Empty pieces are kept as empty vectors so that a stray separator shows up
/// as a length mismatch instead of vanishing.
pub fn parse_semicolon_vectors(input: &str) -> Result<Vec<Vec<f64>>> {
    input.split(VECTOR_SEPARATOR).map(parse_components).collect()
}

pub fn parse_vector_pair(input: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let vectors = parse_semicolon_vectors(input)?;
    match <[Vec<f64>; 2]>::try_from(vectors) {
        Ok([u, v]) => Ok((u, v)),
        Err(_) => Err(VectorError::WrongVectorCount),
    }
}

/// Splits the tokens of `input` into a first and second half.
pub fn split_halves(input: &str) -> Result<(Vec<&str>, Vec<&str>)> {
    let mut tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(VectorError::OddComponentCount);
    }
    let second = tokens.split_off(tokens.len() / 2);
    Ok((tokens, second))
}

pub fn parse_halves(input: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let (first, second) = split_halves(input)?;
    Ok((parse_tokens(first)?, parse_tokens(second)?))
}

/// Exactly six numbers: the first three form `u`, the last three `v`.
pub fn parse_triples(input: &str) -> Result<([f64; 3], [f64; 3])> {
    let values = parse_components(input)?;
    match values.as_slice() {
        [u0, u1, u2, v0, v1, v2] => Ok(([*u0, *u1, *u2], [*v0, *v1, *v2])),
        _ => Err(VectorError::WrongComponentCount),
    }
}

pub fn parse_placeholder_halves(input: &str) -> Result<(Vec<Component>, Vec<Component>)> {
    let (first, second) = split_halves(input)?;
    let u = first.into_iter().map(Component::parse).collect::<Result<Vec<_>>>()?;
    let v = second.into_iter().map(Component::parse).collect::<Result<Vec<_>>>()?;
    Ok((u, v))
}

/// Renders a vector as `[3.0, 4.0]`, using the shortest text that parses
/// back to the same `f64`.
pub fn format_vector(vec: &[f64]) -> String {
    format!("{vec:?}")
}
