use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A non-negative amount of money in cents.
///
/// Arithmetic stays in integer cents; the dollar string is produced only by
/// `Display` at the edges (`$10`, `$10.50`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars * 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (dollars, cents) = (self.0 / 100, self.0 % 100);
        if cents == 0 {
            write!(f, "${dollars}")
        } else {
            write!(f, "${dollars}.{cents:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_and_fractional_amounts() {
        assert_eq!(Money::from_dollars(23).to_string(), "$23");
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(7).to_string(), "$0.07");
        assert_eq!(Money::ZERO.to_string(), "$0");
    }

    #[test]
    fn test_sum_of_amounts() {
        let total: Money = [Money::from_dollars(10), Money::from_cents(1350)]
            .iter()
            .sum();
        assert_eq!(total, Money::from_cents(2350));

        let mut running = Money::ZERO;
        running += Money::from_dollars(12);
        assert_eq!(running + Money::from_dollars(11), Money::from_dollars(23));
    }
}
