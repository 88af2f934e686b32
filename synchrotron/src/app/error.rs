// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Error
//! The error type for the application layer

use crate::error::{BuildError, PhysicsError};
use miette::Diagnostic;

#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum ApplicationError {
    #[error(transparent)]
    #[diagnostic(code(synchrotron::io_error))]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    #[diagnostic(code(synchrotron::config_error))]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Physics(#[from] PhysicsError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Build(#[from] BuildError),
    #[error("the ring describes a ramp but `{missing}` is not set")]
    #[diagnostic(
        code(synchrotron::incomplete_ramp),
        help("give both `injection_energy_gev` and `extraction_energy_gev`, or neither")
    )]
    IncompleteRamp { missing: &'static str },
}
