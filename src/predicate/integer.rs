use super::{IsMultiple, Predicate};

/// A named function, usable wherever a filter predicate is expected.
pub fn is_multiple_of_five(num: &i64) -> bool { num.is_multiple(5) }

/// A closure stored in a constant.
pub const IS_MULTIPLE_OF_TEN: Predicate = &|num| num.is_multiple(10);

/// Collects the multiples of three with an explicit loop.
pub fn multiples_of_three_by_loop(numbers: impl IntoIterator<Item=i64>) -> Vec<i64> {
    let mut multiples_of_three = Vec::new();
    for number in numbers {
        if number.is_multiple(3) {
            multiples_of_three.push(number);
        }
    }
    multiples_of_three
}

/// Collects the multiples of three with `filter()`.
pub fn multiples_of_three(numbers: impl IntoIterator<Item=i64>) -> Vec<i64> {
    numbers.into_iter().filter(|number| number.is_multiple(3)).collect()
}

/// Keeps the multiples of three, then keeps the even ones among those.
pub fn even_multiples_of_three(numbers: impl IntoIterator<Item=i64>) -> Vec<i64> {
    numbers.into_iter()
        .filter(|n| n.is_multiple(3))
        .filter(|n| n.is_multiple(2))
        .collect()
}

/// Squares the even multiples of three, sorts them largest first, then
/// reverses them.
pub fn square_even_multiples_of_three(numbers: impl IntoIterator<Item=i64>) -> Vec<i64> {
    let mut squares: Vec<i64> = numbers.into_iter()
        .filter(|n| n.is_multiple(3))
        .filter(|n| n.is_multiple(2))
        .map(|n| n * n)
        .collect();
    squares.sort_by(|a, b| b.cmp(a));
    squares.into_iter().rev().collect()
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three() {
        let by_loop = multiples_of_three_by_loop(0..=100);
        assert_eq!(by_loop.len(), 34);
        assert_eq!(by_loop, (0..=33).map(|k| 3 * k).collect::<Vec<_>>());
        assert_eq!(multiples_of_three(0..=100), by_loop);
    }

    #[test]
    fn passing_functions() {
        let fives: Vec<i64> = (0..=100).filter(is_multiple_of_five).collect();
        assert_eq!(fives.len(), 21);
        assert_eq!(fives.last(), Some(&100));
        let tens: Vec<i64> = (0..=100).filter(IS_MULTIPLE_OF_TEN).collect();
        assert_eq!(tens, [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn chaining() {
        let evens = even_multiples_of_three(0..=100);
        assert_eq!(evens, (0..=16).map(|k| 6 * k).collect::<Vec<_>>());
        let squares = square_even_multiples_of_three(0..=100);
        assert_eq!(squares, evens.iter().map(|n| n * n).collect::<Vec<_>>());
        assert_eq!(squares.first(), Some(&0));
        assert_eq!(squares.last(), Some(&9216));
    }

    #[test]
    fn empty() {
        assert!(multiples_of_three(1..3).is_empty());
        assert!(square_even_multiples_of_three(std::iter::empty()).is_empty());
    }
}
