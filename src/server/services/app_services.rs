use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use crate::{
    config::AppConfig,
    database::{
        RedisDatabase,
        media_store::DynMediaStore,
        pubsub::{DynEventPublisher, RedisEventPublisher},
        status::{DynStatusRepository, PostgresStatusRepo, RedisStatusRepo},
        timeline::RedisTimelineRepo,
        user::RedisUserRepo,
    },
    server::{
        services::{
            conversion_services::ConversionService, follower_services::FollowerService,
            media_services::MediaService, status_services::StatusService,
            timeline_services::TimelineService, user_services::UserService,
        },
        utils::token_utils::TokenUtil,
    },
};

use super::{
    conversion_services::DynConversionService, follower_services::DynFollowerService,
    media_services::DynMediaService, status_services::DynStatusService,
    timeline_services::DynTimelineService, user_services::DynUserService,
};

/// the full service wiring, injected into every handler as an extension
#[derive(Clone)]
pub struct AppServices {
    pub token_util: Arc<TokenUtil>,
    pub statuses: DynStatusService,
    pub users: DynUserService,
    pub followers: DynFollowerService,
    pub timelines: DynTimelineService,
    pub media: DynMediaService,
    pub conversion: DynConversionService,
    pub http: reqwest::Client,
    pub redis: Arc<RedisDatabase>,
    pub config: Arc<AppConfig>,
}

impl AppServices {
    pub fn new(
        redis_db: RedisDatabase,
        media_store: DynMediaStore,
        pg_pool: Option<PgPool>,
        config: Arc<AppConfig>,
    ) -> Self {
        info!("starting application services...");

        let token_util = Arc::new(TokenUtil::new(config.access_token_secret.clone()));
        let redis_repository = Arc::new(redis_db);
        let http = reqwest::Client::new();

        let publisher =
            Arc::new(RedisEventPublisher::new(redis_repository.clone())) as DynEventPublisher;

        // statuses can live in sql when a database url is configured,
        // everything else stays on redis
        let status_repository: DynStatusRepository = match pg_pool {
            Some(pool) => {
                info!("status repository backed by postgres");
                Arc::new(PostgresStatusRepo::new(pool))
            }
            None => Arc::new(RedisStatusRepo::new(redis_repository.clone())),
        };

        let user_repository = Arc::new(RedisUserRepo::new(redis_repository.clone()));
        let timeline_repository = Arc::new(RedisTimelineRepo::new(redis_repository.clone()));

        let statuses = Arc::new(StatusService::new(
            status_repository,
            publisher.clone(),
            config.status_topic.clone(),
        )) as DynStatusService;

        let users = Arc::new(UserService::new(user_repository.clone())) as DynUserService;

        let followers = Arc::new(FollowerService::new(user_repository)) as DynFollowerService;

        let timelines = Arc::new(TimelineService::new(
            timeline_repository,
            followers.clone(),
            publisher.clone(),
            config.timeline_topic.clone(),
        )) as DynTimelineService;

        let media = Arc::new(MediaService::new(
            media_store.clone(),
            publisher,
            config.media_topic.clone(),
        )) as DynMediaService;

        let conversion = Arc::new(ConversionService::new(
            media_store,
            http.clone(),
            config.clone(),
        )) as DynConversionService;

        Self {
            token_util,
            statuses,
            users,
            followers,
            timelines,
            media,
            conversion,
            http,
            redis: redis_repository,
            config,
        }
    }
}
