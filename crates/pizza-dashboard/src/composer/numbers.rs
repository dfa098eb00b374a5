use crate::model::OrderNumber;
use crate::random;

/// Where freshly opened drafts get their order numbers from.
pub trait OrderNumberSource: Send {
    fn next_number(&mut self) -> OrderNumber;
}

/// `ORD-` followed by five random digits (10000 to 99999).
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomOrderNumbers;

impl OrderNumberSource for RandomOrderNumbers {
    fn next_number(&mut self) -> OrderNumber {
        let digits = 10_000 + random::below(90_000);
        OrderNumber::new(format!("ORD-{digits}"))
    }
}

/// Hands out `ORD-<n>`, `ORD-<n+1>`, ... Deterministic, for tests and demos.
#[derive(Debug, Clone)]
pub struct SequentialOrderNumbers {
    next: u32,
}

impl SequentialOrderNumbers {
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }
}

impl OrderNumberSource for SequentialOrderNumbers {
    fn next_number(&mut self) -> OrderNumber {
        let number = OrderNumber::new(format!("ORD-{}", self.next));
        self.next = self.next.wrapping_add(1);
        number
    }
}
