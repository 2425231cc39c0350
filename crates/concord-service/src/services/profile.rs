//! Profile service
//!
//! First-sign-in setup: the session provider vouches for the identity, and
//! the first authenticated call creates the matching Profile row.

use concord_common::SessionClaims;
use concord_core::entities::Profile;
use tracing::{info, instrument};

use crate::dto::ProfileResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Find the profile for a verified session, if it was set up already
    #[instrument(skip(self, claims))]
    pub async fn current(&self, claims: &SessionClaims) -> ServiceResult<Option<Profile>> {
        Ok(self
            .ctx
            .profile_repo()
            .find_by_external_id(&claims.sub)
            .await?)
    }

    /// Idempotent first-sign-in setup: create the profile from session
    /// claims if absent, else return the existing one
    #[instrument(skip(self, claims))]
    pub async fn setup(&self, claims: &SessionClaims) -> ServiceResult<ProfileResponse> {
        if let Some(existing) = self.current(claims).await? {
            return Ok(ProfileResponse::from(&existing));
        }

        let profile = Profile::new(
            self.ctx.generate_id(),
            claims.sub.clone(),
            claims.name.clone(),
            claims.avatar.clone(),
        );
        self.ctx.profile_repo().create(&profile).await?;

        info!(profile_id = %profile.id, "Profile created on first sign-in");

        Ok(ProfileResponse::from(&profile))
    }
}
