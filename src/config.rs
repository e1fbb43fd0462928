#[derive(clap::ValueEnum, Clone, Debug, Copy)]
pub enum CargoEnv {
    Development,
    Production,
}

#[derive(clap::Parser)]
pub struct AppConfig {
    // production or development
    #[clap(long, env, value_enum)]
    pub cargo_env: CargoEnv,

    // port that the app will bind to
    #[clap(long, env, default_value = "8080")]
    pub port: u16,

    // redis url, used for the state store and for pub/sub
    #[clap(long, env)]
    pub redis_url: String,

    // optional postgres url; when set the status repository runs on sql
    // instead of redis
    #[clap(long, env)]
    pub database_url: Option<String>,

    // run migrations on each startup, only relevant with database_url
    #[clap(long, env)]
    pub run_migrations: bool,

    // signs login tokens, have it be anything secure
    // like 'openssl rand -base64 32'
    #[clap(long, env)]
    pub access_token_secret: String,

    // this should be either * for allowing everything, or a comma seperated list of domains like
    // example.com,something.com
    #[clap(long, env, default_value = "*")]
    pub cors_origin: String,

    // s3 compatible object storage for media, minio works fine locally
    #[clap(long, env)]
    pub s3_endpoint: String,

    #[clap(long, env, default_value = "us-east-1")]
    pub s3_region: String,

    #[clap(long, env)]
    pub s3_access_key: String,

    #[clap(long, env)]
    pub s3_secret_key: String,

    #[clap(long, env, default_value = "media")]
    pub s3_bucket: String,

    // pub/sub channels
    #[clap(long, env, default_value = "status")]
    pub status_topic: String,

    #[clap(long, env, default_value = "timeline")]
    pub timeline_topic: String,

    #[clap(long, env, default_value = "media")]
    pub media_topic: String,

    // converter binaries, override when they're not on PATH
    #[clap(long, env, default_value = "ffmpeg")]
    pub ffmpeg_path: String,

    #[clap(long, env, default_value = "cwebp")]
    pub cwebp_path: String,

    #[clap(long, env, default_value = "gif2webp")]
    pub gif2webp_path: String,

    // scratch space for conversion downloads
    #[clap(long, env, default_value = "/tmp/chirp-media")]
    pub media_tmp_dir: String,

    // optional sentry integration
    #[clap(long, env)]
    pub sentry_dsn: Option<String>,
}

impl Default for AppConfig {
    // defaults aren't really needed here but it's here as a bad fallback
    fn default() -> Self {
        Self {
            cargo_env: CargoEnv::Development,
            port: 8080,
            redis_url: "redis://localhost:6379".to_string(),
            database_url: None,
            run_migrations: false,
            access_token_secret: "default-access-secret".to_string(),
            cors_origin: "*".to_string(),
            s3_endpoint: "http://localhost:9000".to_string(),
            s3_region: "us-east-1".to_string(),
            s3_access_key: "minioadmin".to_string(),
            s3_secret_key: "minioadmin".to_string(),
            s3_bucket: "media".to_string(),
            status_topic: "status".to_string(),
            timeline_topic: "timeline".to_string(),
            media_topic: "media".to_string(),
            ffmpeg_path: "ffmpeg".to_string(),
            cwebp_path: "cwebp".to_string(),
            gif2webp_path: "gif2webp".to_string(),
            media_tmp_dir: "/tmp/chirp-media".to_string(),
            sentry_dsn: None,
        }
    }
}
