//! Channel entity <-> model mapper

use concord_core::entities::Channel;
use concord_core::value_objects::Snowflake;

use crate::models::ChannelModel;

impl From<ChannelModel> for Channel {
    fn from(model: ChannelModel) -> Self {
        Channel {
            id: Snowflake::new(model.id),
            server_id: Snowflake::new(model.server_id),
            name: model.name,
            kind: model.kind.into(),
            created_by: Snowflake::new(model.created_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
