//! Shared test harness modules for the Carefare CLI.

use super::*;

mod evaluate_unit;
mod helpers;
