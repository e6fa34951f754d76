//! Calculation logic for the payroll compliance engine.
//!
//! This module contains the statutory contribution calculators (provident
//! fund, ESIC, regional professional tax and gratuity) and the salary
//! structure synthesizer that composes them. Every function is pure and
//! rounds each monetary line item to whole currency units.

mod esic;
mod gratuity;
mod professional_tax;
mod provident_fund;
mod rounding;
mod salary_structure;

pub use esic::calculate_esic;
pub use gratuity::calculate_gratuity;
pub use professional_tax::{NOT_APPLICABLE_NOTE, calculate_professional_tax};
pub use provident_fund::calculate_provident_fund;
pub use rounding::round_to_unit;
pub use salary_structure::{synthesize_salary_structure, try_synthesize_salary_structure};
