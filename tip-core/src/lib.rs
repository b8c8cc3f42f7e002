pub mod calculations;
pub mod input;
pub mod session;

pub use calculations::{ZERO_DISPLAY, tip_per_person, total_per_person};
pub use input::{FieldRules, sanitize};
pub use session::{
    CalculatorSession, PRESET_TIP_PERCENTS, SplitSummary, TipSelection, people_count_is_zero,
};
