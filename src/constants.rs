use alloy_primitives::{uint, U256};

pub const ONE: U256 = uint!(1_U256);
pub const TWO: U256 = uint!(2_U256);
