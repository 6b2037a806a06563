//! Utility modules: build info and ~/.railops/ file helpers.

pub mod build_info;
pub mod persistence;
