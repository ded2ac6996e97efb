use crate::server::error::AppError;
use chrono::{Duration, Utc};
use entity::prelude::*;
use test_utils::{builder::TestBuilder, factory};

mod attendance;
mod authorization;
mod rules;
