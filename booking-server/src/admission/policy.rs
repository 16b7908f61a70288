//! Capacity Policy
//!
//! The admission decision table, as a pure function over the confirmed
//! count, the bus capacity, and the caller's overbook override. No I/O here;
//! the engine applies the same limits through the atomic insert guard.

/// Tunable capacity policy values
///
/// | 配置 | 默认值 | 说明 |
/// |------|--------|------|
/// | default_capacity | 70 | 车辆容量未知时的兜底座位数 |
/// | overbook_allowance | 5 | 软超订允许超出的座位数 |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPolicy {
    /// Assumed seat capacity when the schedule's bus is unknown
    pub default_capacity: i64,
    /// Seats allowed above nominal capacity with the autoBook override
    pub overbook_allowance: i64,
}

impl CapacityPolicy {
    pub const DEFAULT_CAPACITY: i64 = 70;
    pub const DEFAULT_OVERBOOK_ALLOWANCE: i64 = 5;

    /// Capacity to use for a schedule, falling back to the default
    pub fn effective_capacity(&self, capacity: Option<i64>) -> i64 {
        capacity.unwrap_or(self.default_capacity)
    }

    /// Hard limit: nominal seat capacity
    pub fn hard_limit(&self, capacity: i64) -> i64 {
        capacity
    }

    /// Soft limit: capacity plus the overbooking allowance
    pub fn soft_limit(&self, capacity: i64) -> i64 {
        capacity + self.overbook_allowance
    }

    /// The limit the admission guard enforces for one request
    pub fn admission_limit(&self, capacity: i64, auto_book: bool) -> i64 {
        if auto_book {
            self.soft_limit(capacity)
        } else {
            self.hard_limit(capacity)
        }
    }

    /// Evaluate the decision table.
    ///
    /// Rules, in order:
    /// 1. at/over the hard limit without the override → `RejectFull`
    /// 2. at/over the soft limit (override irrelevant) → `RejectOverbookLimit`
    /// 3. otherwise → `Admit`
    pub fn decide(&self, booked_count: i64, capacity: i64, auto_book: bool) -> AdmissionDecision {
        if booked_count >= self.hard_limit(capacity) && !auto_book {
            return AdmissionDecision::RejectFull;
        }
        if booked_count >= self.soft_limit(capacity) {
            return AdmissionDecision::RejectOverbookLimit;
        }
        AdmissionDecision::Admit
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self {
            default_capacity: Self::DEFAULT_CAPACITY,
            overbook_allowance: Self::DEFAULT_OVERBOOK_ALLOWANCE,
        }
    }
}

/// Outcome of the decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionDecision {
    /// Under the applicable limit — insert the booking
    Admit,
    /// Bus full; the caller may retry with the autoBook override
    RejectFull,
    /// Soft-overbook allowance exhausted; no override helps
    RejectOverbookLimit,
}
