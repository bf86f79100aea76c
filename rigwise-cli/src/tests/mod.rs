//! Shared test harness modules for the Rigwise CLI.

use super::*;

mod render;
mod unit;
