use actix_web::HttpResponse;
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, TextEncoder};

use crate::models::DispatchOutcome;

static EVENTS_CONSUMED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    let counter = IntCounter::new(
        "notification_dispatcher_events_consumed_total",
        "Total MessageCreated events consumed from Kafka",
    )
    .expect("failed to create notification_dispatcher_events_consumed_total");
    prometheus::default_registry()
        .register(Box::new(counter.clone()))
        .expect("failed to register notification_dispatcher_events_consumed_total");
    counter
});

static DISPATCH_OUTCOMES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    let counter = IntCounterVec::new(
        Opts::new(
            "notification_dispatcher_dispatch_outcomes_total",
            "Dispatch outcomes per consumed MessageCreated event",
        ),
        &["outcome"],
    )
    .expect("failed to create notification_dispatcher_dispatch_outcomes_total");
    prometheus::default_registry()
        .register(Box::new(counter.clone()))
        .expect("failed to register notification_dispatcher_dispatch_outcomes_total");
    counter
});

pub fn event_consumed() {
    EVENTS_CONSUMED_TOTAL.inc();
}

pub fn record_outcome(outcome: DispatchOutcome) {
    DISPATCH_OUTCOMES_TOTAL
        .with_label_values(&[outcome.as_str()])
        .inc();
}

pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
