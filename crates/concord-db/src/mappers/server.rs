//! Server entity <-> model mapper

use concord_core::entities::{Member, Server};
use concord_core::value_objects::Snowflake;

use crate::models::{ServerModel, ServerWithMembershipModel};

impl From<ServerModel> for Server {
    fn from(model: ServerModel) -> Self {
        Server {
            id: Snowflake::new(model.id),
            name: model.name,
            image_url: model.image_url,
            owner_id: Snowflake::new(model.owner_id),
            invite_code: model.invite_code,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ServerWithMembershipModel> for (Server, Member) {
    fn from(model: ServerWithMembershipModel) -> Self {
        let member = Member {
            id: Snowflake::new(model.member_id),
            server_id: Snowflake::new(model.id),
            profile_id: Snowflake::new(model.member_profile_id),
            role: model.member_role.into(),
            joined_at: model.member_joined_at,
            updated_at: model.member_updated_at,
        };
        let server = Server {
            id: Snowflake::new(model.id),
            name: model.name,
            image_url: model.image_url,
            owner_id: Snowflake::new(model.owner_id),
            invite_code: model.invite_code,
            created_at: model.created_at,
            updated_at: model.updated_at,
        };
        (server, member)
    }
}
