use crate::*;

/// The digit feature compared by the swap rule.
///
/// Above one hundred it is hundreds times ones, from ten to one hundred it is
/// tens times ones, and below ten it is the score squared.
pub fn digit_product(score: Score) -> Score {
    match score {
        0..10 => score * score,
        10..=100 => (score / 10) * (score % 10),
        _ => (score / 100) * (score % 10),
    }
}

/// True if the two scores trade places.
pub fn is_swap(player: Score, opponent: Score) -> bool {
    digit_product(player) == digit_product(opponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_products() {
        assert_eq!(digit_product(0), 0);
        assert_eq!(digit_product(3), 9);
        assert_eq!(digit_product(18), 8);
        assert_eq!(digit_product(91), 9);
        assert_eq!(digit_product(100), 0);
        assert_eq!(digit_product(105), 5);
        assert_eq!(digit_product(162), 2);
    }

    #[test]
    fn mirrored_digits_swap() {
        assert!(is_swap(91, 19));
        assert!(is_swap(19, 91));
        assert!(is_swap(3, 91));
        assert!(is_swap(12, 21));
        assert!(!is_swap(18, 9));
    }

    #[test]
    fn swap_is_symmetric() {
        for a in 0..200 {
            for b in 0..200 {
                assert_eq!(is_swap(a, b), is_swap(b, a));
            }
        }
    }
}
