use dotenvy::dotenv;
use std::env;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub app_env: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub kafka: KafkaConfig,
    pub fcm: Option<FcmConfig>,
}

#[derive(Debug, Clone)]
pub struct KafkaConfig {
    pub brokers: String,
    pub topic: String,
    pub group_id: String,
}

#[derive(Debug, Clone)]
pub struct FcmConfig {
    pub project_id: String,
    pub service_account_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::Config("DATABASE_URL missing".into()))?;

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8000);

        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let kafka = KafkaConfig {
            brokers: env::var("KAFKA_BROKERS").unwrap_or_else(|_| "localhost:9092".into()),
            topic: env::var("KAFKA_TOPIC").unwrap_or_else(|_| "MessageCreated".into()),
            group_id: env::var("KAFKA_GROUP_ID")
                .unwrap_or_else(|_| "notification-dispatcher".into()),
        };

        // FCM credentials are optional as a pair; without them the service
        // runs with the disabled push gateway.
        let fcm = match (
            env::var("FCM_PROJECT_ID"),
            env::var("FCM_SERVICE_ACCOUNT_PATH"),
        ) {
            (Ok(project_id), Ok(service_account_path)) => Some(FcmConfig {
                project_id,
                service_account_path,
            }),
            _ => None,
        };

        Ok(Self {
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            port,
            database_url,
            database_max_connections,
            kafka,
            fcm,
        })
    }
}
