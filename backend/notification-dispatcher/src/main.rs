use actix_web::{web, App, HttpServer};
use mesaj_fcm_shared::{FcmClient, ServiceAccountKey};
use notification_dispatcher::services::{
    DisabledPushGateway, FcmPushGateway, MessageEventConsumer, NotificationDispatcher,
    PgProfileStore, PushGateway,
};
use notification_dispatcher::{metrics, Config};
use sqlx::postgres::PgPoolOptions;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting notification dispatcher");

    let config = Config::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    // Initialize database
    let db_pool = match PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            tracing::info!("Successfully connected to database");
            pool
        }
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "Database connection failed",
            ));
        }
    };

    // Initialize the push gateway once for the process lifetime
    let gateway: Arc<dyn PushGateway> = match &config.fcm {
        Some(fcm) => {
            let key = ServiceAccountKey::from_file(&fcm.service_account_path)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
            let client = Arc::new(FcmClient::new(fcm.project_id.clone(), key));
            tracing::info!("FCM client initialized for project {}", fcm.project_id);
            Arc::new(FcmPushGateway::new(client))
        }
        None => {
            tracing::warn!("FCM credentials not configured - push delivery disabled");
            Arc::new(DisabledPushGateway)
        }
    };

    let profiles = Arc::new(PgProfileStore::new(db_pool.clone()));
    let dispatcher = Arc::new(NotificationDispatcher::new(profiles, gateway));

    // Start the event consumer in the background
    let consumer = MessageEventConsumer::new(
        config.kafka.brokers.clone(),
        config.kafka.topic.clone(),
        config.kafka.group_id.clone(),
    );
    let consumer_dispatcher = dispatcher.clone();
    tokio::spawn(async move {
        if let Err(e) = consumer.start(consumer_dispatcher).await {
            tracing::error!("Kafka consumer exited: {}", e);
        }
    });

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting HTTP server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .route("/health", web::get().to(|| async { "OK" }))
            .route("/metrics", web::get().to(metrics::serve_metrics))
            .route("/", web::get().to(|| async { "Notification Dispatcher v1.0" }))
    })
    .bind(&addr)?
    .run()
    .await
}
