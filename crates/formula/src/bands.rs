//! Band label resolution

use sentix_core::{Error, Result};

/// Map a band label onto its offset in a pixel's band vector.
///
/// Labels follow the 13-band Sentinel-2 MSI layout: bands 1..8 sit at
/// offsets 0..7, `8A` at offset 8, and bands 9..12 at offsets 9..12.
/// Offset 8 belongs to `8A` alone, which is why band 9 onward is shifted
/// up by one. Leading zeros are accepted (`04` equals `4`), and the `A`
/// suffix is case-insensitive.
///
/// Any other label fails with [`Error::UnknownBandLabel`].
pub fn band_index(label: &str) -> Result<usize> {
    let unknown = || Error::UnknownBandLabel(label.to_string());

    let chars: Vec<char> = label.chars().collect();
    let num = match chars.as_slice() {
        [d] if d.is_ascii_digit() => d.to_digit(10).unwrap() as usize,
        [d1, d2] if d1.is_ascii_digit() && d2.is_ascii_digit() => {
            (d1.to_digit(10).unwrap() * 10 + d2.to_digit(10).unwrap()) as usize
        }
        [d, a] if d.is_ascii_digit() && a.eq_ignore_ascii_case(&'a') => {
            if *d != '8' {
                return Err(unknown());
            }
            return Ok(8);
        }
        _ => return Err(unknown()),
    };

    if !(1..=12).contains(&num) {
        return Err(unknown());
    }

    // Offset 8 is reserved for band 8A, so band 9 onward shifts up by one.
    let nr = num - 1;
    Ok(if nr < 8 { nr } else { nr + 1 })
}
