//! Conversation and direct message entity <-> model mappers

use concord_core::entities::{Conversation, DirectMessage, Member, Profile};
use concord_core::traits::{DirectMessageWithAuthor, MemberWithProfile};
use concord_core::value_objects::Snowflake;

use crate::models::{
    ConversationModel, ConversationWithMembershipModel, DirectMessageModel,
    DirectMessageWithAuthorModel,
};

impl From<ConversationModel> for Conversation {
    fn from(model: ConversationModel) -> Self {
        Conversation {
            id: Snowflake::new(model.id),
            member_one_id: Snowflake::new(model.member_one_id),
            member_two_id: Snowflake::new(model.member_two_id),
            created_at: model.created_at,
        }
    }
}

impl From<ConversationWithMembershipModel> for (Conversation, Member) {
    fn from(model: ConversationWithMembershipModel) -> Self {
        let conversation = Conversation {
            id: Snowflake::new(model.id),
            member_one_id: Snowflake::new(model.member_one_id),
            member_two_id: Snowflake::new(model.member_two_id),
            created_at: model.created_at,
        };
        let member = Member {
            id: Snowflake::new(model.member_id),
            server_id: Snowflake::new(model.member_server_id),
            profile_id: Snowflake::new(model.member_profile_id),
            role: model.member_role.into(),
            joined_at: model.member_joined_at,
            updated_at: model.member_updated_at,
        };
        (conversation, member)
    }
}

impl From<DirectMessageModel> for DirectMessage {
    fn from(model: DirectMessageModel) -> Self {
        DirectMessage {
            id: Snowflake::new(model.id),
            conversation_id: Snowflake::new(model.conversation_id),
            author_id: Snowflake::new(model.author_id),
            content: model.content,
            file_url: model.file_url,
            deleted: model.deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<DirectMessageWithAuthorModel> for DirectMessageWithAuthor {
    fn from(model: DirectMessageWithAuthorModel) -> Self {
        DirectMessageWithAuthor {
            message: DirectMessage {
                id: Snowflake::new(model.id),
                conversation_id: Snowflake::new(model.conversation_id),
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
