//! Verhoeff checksum over decimal digit strings.
//!
//! The scheme is built on the dihedral group D5 and detects every
//! single-digit error and every adjacent transposition. The three tables
//! below are the fixed constants of the algorithm and must not be altered.

/// Cayley table of D5: `MULTIPLICATION[a][b]` is `a * b` in the group.
const MULTIPLICATION: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position-dependent permutations; row `i` is applied at offset `i mod 8`.
const PERMUTATION: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 7, 8, 6, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Group inverses, used only when generating a check digit.
const INVERSE: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Folds `digits` right to left, starting the permutation index at `offset`.
///
/// Returns `None` if any character is not an ASCII digit.
fn fold(digits: &str, offset: usize) -> Option<u8> {
    digits
        .bytes()
        .rev()
        .enumerate()
        .try_fold(0u8, |check, (i, byte)| {
            if !byte.is_ascii_digit() {
                return None;
            }
            let permuted = PERMUTATION[(i + offset) % 8][usize::from(byte - b'0')];
            Some(MULTIPLICATION[usize::from(check)][usize::from(permuted)])
        })
}

/// Returns true if `digits` (check digit last) passes the Verhoeff check.
///
/// Non-digit characters and the empty string never validate.
///
/// # Example
///
/// ```
/// use payroll_compliance::validation::verhoeff_validate;
///
/// assert!(verhoeff_validate("2363"));
/// assert!(!verhoeff_validate("2364"));
/// ```
pub fn verhoeff_validate(digits: &str) -> bool {
    !digits.is_empty() && fold(digits, 0) == Some(0)
}

/// Computes the check digit to append to `payload`.
///
/// Returns `None` if `payload` contains a non-digit character.
///
/// # Example
///
/// ```
/// use payroll_compliance::validation::verhoeff_check_digit;
///
/// assert_eq!(verhoeff_check_digit("236"), Some(3));
/// ```
pub fn verhoeff_check_digit(payload: &str) -> Option<u8> {
    fold(payload, 1).map(|check| INVERSE[usize::from(check)])
}
