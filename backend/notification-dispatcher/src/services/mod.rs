pub mod dispatcher;
pub mod kafka_consumer;
pub mod profile_store;
pub mod push_gateway;

pub use dispatcher::NotificationDispatcher;
pub use kafka_consumer::MessageEventConsumer;
pub use profile_store::{PgProfileStore, ProfileStore};
pub use push_gateway::{DisabledPushGateway, FcmPushGateway, PushGateway};
