use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;
use uuid::Uuid;

use crate::database::user::{DynUserRepository, User};
use crate::server::error::{AppResult, Error};

pub type DynFollowerService = Arc<dyn FollowerServiceTrait + Send + Sync>;

#[automock]
#[async_trait]
pub trait FollowerServiceTrait {
    async fn get_followers(&self, user_id: Uuid) -> AppResult<Vec<User>>;
    async fn get_followees(&self, user_id: Uuid) -> AppResult<Vec<User>>;
    /// `follower` starts following `user_to_follow`, returns the followee
    async fn follow_user(&self, user_to_follow: Uuid, follower: Uuid) -> AppResult<User>;
    async fn unfollow_user(&self, user_to_unfollow: Uuid, follower: Uuid) -> AppResult<()>;
}

/// maintains both sides of the adjacency. the two saves are not atomic, a
/// crash between them leaves a dangling edge.
pub struct FollowerService {
    repository: DynUserRepository,
}

impl FollowerService {
    pub fn new(repository: DynUserRepository) -> Self {
        Self { repository }
    }

    async fn resolve(&self, ids: impl Iterator<Item = Uuid>) -> AppResult<Vec<User>> {
        let mut users = Vec::new();
        for id in ids {
            users.push(self.repository.get(id).await?);
        }
        Ok(users)
    }
}

#[async_trait]
impl FollowerServiceTrait for FollowerService {
    async fn get_followers(&self, user_id: Uuid) -> AppResult<Vec<User>> {
        let user = self.repository.get(user_id).await?;
        self.resolve(user.followers.into_iter()).await
    }

    async fn get_followees(&self, user_id: Uuid) -> AppResult<Vec<User>> {
        let user = self.repository.get(user_id).await?;
        self.resolve(user.followees.into_iter()).await
    }

    async fn follow_user(&self, user_to_follow: Uuid, follower: Uuid) -> AppResult<User> {
        if user_to_follow == follower {
            return Err(Error::SelfFollow);
        }

        let mut followee = self.repository.get(user_to_follow).await?;
        followee.followers.insert(follower);

        let mut following = self.repository.get(follower).await?;
        following.followees.insert(user_to_follow);

        let followee = self.repository.save(followee).await?;
        self.repository.save(following).await?;

        info!("{} now follows {}", follower, user_to_follow);
        Ok(followee)
    }

    async fn unfollow_user(&self, user_to_unfollow: Uuid, follower: Uuid) -> AppResult<()> {
        if user_to_unfollow == follower {
            return Err(Error::SelfFollow);
        }

        let mut followee = self.repository.get(user_to_unfollow).await?;
        if !followee.followers.contains(&follower) {
            return Err(Error::NotFound(follower));
        }
        followee.followers.remove(&follower);

        let mut following = self.repository.get(follower).await?;
        if !following.followees.contains(&user_to_unfollow) {
            return Err(Error::NotFound(user_to_unfollow));
        }
        following.followees.remove(&user_to_unfollow);

        self.repository.save(followee).await?;
        self.repository.save(following).await?;

        info!("{} unfollowed {}", follower, user_to_unfollow);
        Ok(())
    }
}
