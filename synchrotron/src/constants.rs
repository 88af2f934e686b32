// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Constants
//!
//! Defines the physical constants used by the calculations, CODATA 2018 values in SI units

pub const SPEED_OF_LIGHT: f64 = 299_792_458.0; // Speed of light in vacuum in m / s
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19; // Single proton charge in C
pub const PROTON_MASS: f64 = 1.672_621_923_69e-27; // Proton rest mass in kg
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31; // Electron rest mass in kg
