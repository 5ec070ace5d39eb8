//! Comma-separated numeric arguments

use std::str::FromStr;

use anyhow::{anyhow, bail, Error, Result};
use mapdots_core::{Pointer, Rect};

/// Two numbers, `X,Y`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair(pub f64, pub f64);

impl Pair {
    pub fn to_pointer(self) -> Pointer {
        Pointer::new(self.0, self.1)
    }
}

impl FromStr for Pair {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let [x, y] = parse_numbers::<2>(s)?;
        Ok(Pair(x, y))
    }
}

/// Four numbers, `LEFT,TOP,WIDTH,HEIGHT`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectArg(pub Rect);

impl FromStr for RectArg {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let [left, top, width, height] = parse_numbers::<4>(s)?;
        let rect = Rect::new(left, top, width, height);
        if !rect.is_usable() {
            bail!("width and height must be positive");
        }
        Ok(RectArg(rect))
    }
}

fn parse_numbers<const N: usize>(s: &str) -> Result<[f64; N]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        bail!("expected {} comma-separated numbers, got '{}'", N, s);
    }

    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        let value: f64 = part
            .parse()
            .map_err(|_| anyhow!("'{}' is not a number", part))?;
        if !value.is_finite() {
            bail!("'{}' is not a finite number", part);
        }
        *slot = value;
    }
    Ok(out)
}
