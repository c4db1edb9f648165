//! Parsers for the `Display` text form of vectors and colors
//!
//! Accepts `(x, y)`, `(x, y, z)` and `(r, g, b, a)` with arbitrary
//! whitespace around the numbers.

use std::str::FromStr;

use nom::{
    character::complete::{char, multispace0},
    combinator::all_consuming,
    multi::separated_list1,
    number::complete::float,
    sequence::{delimited, preceded, terminated},
    IResult,
};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::vector::{Vector2, Vector3};

fn component(input: &str) -> IResult<&str, f32> {
    delimited(multispace0, float, multispace0)(input)
}

fn tuple_list(input: &str) -> IResult<&str, Vec<f32>> {
    let open = preceded(multispace0, char('('));
    let close = terminated(char(')'), multispace0);
    delimited(open, separated_list1(char(','), component), close)(input)
}

/// Parse a parenthesized list of exactly `N` floats
pub fn parse_components<const N: usize>(input: &str) -> Result<[f32; N]> {
    let (_, values) = all_consuming(tuple_list)(input).map_err(|e| Error::Parse {
        input: input.to_string(),
        message: e.to_string(),
    })?;

    let count = values.len();
    values.try_into().map_err(|_| Error::Parse {
        input: input.to_string(),
        message: format!("expected {} components, found {}", N, count),
    })
}

impl FromStr for Vector2 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let [x, y] = parse_components::<2>(s)?;
        Ok(Self::new(x, y))
    }
}

impl FromStr for Vector3 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let [x, y, z] = parse_components::<3>(s)?;
        Ok(Self::new(x, y, z))
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let [r, g, b, a] = parse_components::<4>(s)?;
        Ok(Self::new(r, g, b, a))
    }
}
