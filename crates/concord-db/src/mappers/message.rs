//! Message entity <-> model mapper

use concord_core::entities::{Member, Message, Profile};
use concord_core::traits::{MemberWithProfile, MessageWithAuthor};
use concord_core::value_objects::Snowflake;

use crate::models::{MessageModel, MessageWithAuthorModel};

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: Snowflake::new(model.id),
            channel_id: Snowflake::new(model.channel_id),
            author_id: Snowflake::new(model.author_id),
            content: model.content,
            file_url: model.file_url,
            deleted: model.deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<MessageWithAuthorModel> for MessageWithAuthor {
    fn from(model: MessageWithAuthorModel) -> Self {
        MessageWithAuthor {
            message: Message {
                id: Snowflake::new(model.id),
                channel_id: Snowflake::new(model.channel_id),
                author_id: Snowflake::new(model.author_id),
                content: model.content,
                file_url: model.file_url,
                deleted: model.deleted,
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            author: MemberWithProfile {
                member: Member {
                    id: Snowflake::new(model.author_id),
                    server_id: Snowflake::new(model.member_server_id),
                    profile_id: Snowflake::new(model.member_profile_id),
                    role: model.member_role.into(),
                    joined_at: model.member_joined_at,
                    updated_at: model.member_updated_at,
                },
                profile: Profile {
                    id: Snowflake::new(model.member_profile_id),
                    external_id: model.profile_external_id,
                    name: model.profile_name,
                    avatar_url: model.profile_avatar_url,
                    created_at: model.profile_created_at,
                    updated_at: model.profile_updated_at,
                },
            },
        }
    }
}
