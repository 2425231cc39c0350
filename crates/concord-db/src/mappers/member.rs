//! Member entity <-> model mapper

use concord_core::entities::{Member, Profile};
use concord_core::traits::MemberWithProfile;
use concord_core::value_objects::Snowflake;

use crate::models::{MemberModel, MemberWithProfileModel};

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: Snowflake::new(model.id),
            server_id: Snowflake::new(model.server_id),
            profile_id: Snowflake::new(model.profile_id),
            role: model.role.into(),
            joined_at: model.joined_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<MemberWithProfileModel> for MemberWithProfile {
    fn from(model: MemberWithProfileModel) -> Self {
        MemberWithProfile {
            member: Member {
                id: Snowflake::new(model.id),
                server_id: Snowflake::new(model.server_id),
                profile_id: Snowflake::new(model.profile_id),
                role: model.role.into(),
                joined_at: model.joined_at,
                updated_at: model.updated_at,
            },
            profile: Profile {
                id: Snowflake::new(model.profile_id),
                external_id: model.profile_external_id,
                name: model.profile_name,
                avatar_url: model.profile_avatar_url,
                created_at: model.profile_created_at,
                updated_at: model.profile_updated_at,
            },
        }
    }
}
