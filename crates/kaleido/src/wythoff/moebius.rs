//! Stage 1: symmetry group, order, nominal density and Euler characteristic.
//!
//! The order `g` counts Moebius triangles on the sphere:
//! `g * pi * (1/2 + 1/3 + 1/K - 1) = 4 * pi`. The density `D` counts how often
//! `g` copies of the Schwarz triangle cover it:
//! `D * 4 * pi = g * pi * (1/p + 1/q + 1/r - 1)`.

use crate::error::{WythoffError, WythoffResult};
use crate::rational::{denominator, numerator};
use crate::symbol::{WythoffSymbol, DIRHOMBIC_INDEX};

use super::types::MoebiusTriangle;

pub fn find_moebius_triangle(sym: &WythoffSymbol) -> WythoffResult<MoebiusTriangle> {
    let mut largest: i64 = 2;
    let mut twos = 0;
    for &p in sym.params.iter().filter(|&&p| p > 0.0) {
        if p == 2.0 {
            twos += 1;
            continue;
        }
        let k = numerator(p);
        if (k > largest && largest == 4) || (k < largest && k == 4) {
            return Err(WythoffError::symbol(
                &sym.text,
                "numerators 4 and 5 cannot occur together",
            ));
        }
        largest = largest.max(k);
    }

    let (symmetry, order) = if twos >= 2 {
        (2, 4 * largest)
    } else {
        if largest > 5 {
            return Err(WythoffError::symbol(&sym.text, "numerator too large"));
        }
        (largest, 24 * largest / (6 - largest))
    };

    // The bar-free entry gets its density and characteristic after the rewrite.
    let (mut density, mut chi) = (0, 0);
    if sym.index != Some(DIRHOMBIC_INDEX) {
        density = -order;
        chi = -order;
        for &p in sym.params.iter().filter(|&&p| p > 0.0) {
            let i = order / numerator(p);
            chi += i;
            density += i * denominator(p);
        }
        chi /= 2;
        density /= 4;
        if density <= 0 {
            return Err(WythoffError::symbol(&sym.text, "nonpositive density"));
        }
    }

    Ok(MoebiusTriangle {
        symmetry,
        order,
        density,
        chi,
    })
}
