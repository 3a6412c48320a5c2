pub mod clock;
pub mod day_range;
pub mod evaluator;
pub mod weekly_hours;
pub mod zoned_now;
