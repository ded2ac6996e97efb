use crate::server::data::attendance::AttendanceRepository;
use chrono::Duration;
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod exists_for_card_and_session;
mod find_card_by_code;
mod get_by_session_id;
