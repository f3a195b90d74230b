//! Modular inverse via the extended Euclidean algorithm.

use num_bigint::Sign::Plus;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::errors::{Error, Result};

/// Computes `(g, x, y)` such that `a*x + b*y = g = gcd(a, b)`.
///
/// Runs iteratively, so the stack stays flat no matter how long the
/// remainder sequence gets. `extended_gcd(0, b)` is `(b, 0, 1)` and
/// `extended_gcd(a, 0)` is `(a, 1, 0)`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let (quotient, remainder) = old_r.div_rem(&r);
        old_r = core::mem::replace(&mut r, remainder);

        let next_x = &old_x - &quotient * &x;
        old_x = core::mem::replace(&mut x, next_x);

        let next_y = &old_y - &quotient * &y;
        old_y = core::mem::replace(&mut y, next_y);
    }

    (old_r, old_x, old_y)
}

/// Returns the multiplicative inverse of `e` modulo `phi`, in `[0, phi)`.
///
/// Fails with [`Error::NotCoprime`] when `gcd(e, phi) != 1` and with
/// [`Error::InvalidModulus`] when `phi` is zero.
pub fn mod_inverse(e: &BigUint, phi: &BigUint) -> Result<BigUint> {
    if phi.is_zero() {
        return Err(Error::InvalidModulus);
    }

    let phi = BigInt::from_biguint(Plus, phi.clone());
    let (g, x, _) = extended_gcd(&BigInt::from_biguint(Plus, e.clone()), &phi);
    if !g.is_one() {
        return Err(Error::NotCoprime);
    }

    // mod_floor keeps the result non-negative even when x < 0
    x.mod_floor(&phi).to_biguint().ok_or(Error::NotCoprime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    #[test]
    fn test_extended_gcd() {
        let cases: [(i64, i64, i64); 7] = [
            (0, 7, 7),
            (7, 0, 7),
            (240, 46, 2),
            (46, 240, 2),
            (17, 3120, 1),
            (65537, 3120, 1),
            (1071, 462, 21),
        ];

        for (a, b, want) in cases {
            let a = BigInt::from_i64(a).unwrap();
            let b = BigInt::from_i64(b).unwrap();
            let (g, x, y) = extended_gcd(&a, &b);
            assert_eq!(g, BigInt::from_i64(want).unwrap(), "gcd({}, {})", a, b);
            assert_eq!(&a * &x + &b * &y, g, "bezout({}, {})", a, b);
        }
    }

    #[test]
    fn test_extended_gcd_base_case() {
        let b = BigInt::from_u64(42).unwrap();
        assert_eq!(
            extended_gcd(&BigInt::zero(), &b),
            (b.clone(), BigInt::zero(), BigInt::one())
        );
    }

    #[test]
    fn test_mod_inverse() {
        let tests = [
            ["17", "3120", "2753"],
            ["65537", "3120", "2753"],
            ["1", "3120", "1"],
            ["1234567", "458948883992", ""],
            ["239487239847", "2410312426921032588552076022197566074856950548502459942654116941958108831682612228890093858261341614673227141477904012196503648957050582631942730706805009223062734745341073406696246014589361659774041027169249453200378729434170325843778659198143763193776859869524088940195577346119843545301547043747207749969763750084308926339295559968882457872412993810129130294592999947926365264059284647209730384947211681434464714438488520940127459844288859336526896320919633919", ""],
        ];

        for test in &tests {
            let element = BigUint::parse_bytes(test[0].as_bytes(), 10).unwrap();
            let modulus = BigUint::parse_bytes(test[1].as_bytes(), 10).unwrap();

            let inverse = mod_inverse(&element, &modulus).unwrap();
            assert!(inverse < modulus);
            if !test[2].is_empty() {
                assert_eq!(inverse, BigUint::parse_bytes(test[2].as_bytes(), 10).unwrap());
            }

            let cmp = (&inverse * &element) % &modulus;
            assert!(
                cmp.is_one(),
                "mod_inverse({}, {}) * {} % {} = {}, not 1",
                &element,
                &modulus,
                &element,
                &modulus,
                &cmp
            );
        }

        // exhaustive tests for small numbers
        for n in 2u64..100 {
            let modulus = BigUint::from_u64(n).unwrap();
            for x in 1..n {
                let element = BigUint::from_u64(x).unwrap();
                if !element.gcd(&modulus).is_one() {
                    assert_eq!(mod_inverse(&element, &modulus), Err(Error::NotCoprime));
                    continue;
                }

                let inverse = mod_inverse(&element, &modulus).unwrap();
                let cmp = (&inverse * &element) % &modulus;
                assert!(cmp.is_one(), "mod_inverse({}, {})", x, n);
            }
        }
    }

    #[test]
    fn test_mod_inverse_zero_modulus() {
        let e = BigUint::from_u64(3).unwrap();
        assert_eq!(mod_inverse(&e, &BigUint::zero()), Err(Error::InvalidModulus));
    }
}
