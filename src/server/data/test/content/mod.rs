use entity::prelude::{Faq, News, TeamMember, Treatment};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::content::ContentRepository,
    model::{
        faq::CreateFaqDto,
        team::{CreateTeamMemberDto, UpdateTeamMemberDto},
        treatment::CreateTreatmentDto,
    },
};

mod create;
mod delete;
mod get_by_id;
mod get_by_slug;
mod list;
mod update;
