//! Tests for event publishers

use blog_domain::events::DomainEvent;
use blog_domain::ports::infrastructure::EventPublisher;
use blog_providers::events::{NullEventPublisher, TokioEventPublisher};
use futures::StreamExt;

fn reset_event() -> DomainEvent {
    DomainEvent::PasswordResetRequested {
        user_id: 42,
        email: "reader@example.com".to_string(),
        reset_token: "token".to_string(),
    }
}

#[tokio::test]
async fn test_tokio_publisher_delivers_to_subscribers() {
    let publisher = TokioEventPublisher::new();
    assert!(!publisher.has_subscribers());

    let mut stream = publisher.subscribe();
    assert!(publisher.has_subscribers());
    assert_eq!(publisher.subscriber_count(), 1);

    publisher.publish(reset_event()).await.unwrap();
    let received = stream.next().await.unwrap();
    assert_eq!(received, reset_event());
}

#[tokio::test]
async fn test_tokio_publish_without_subscribers_succeeds() {
    let publisher = TokioEventPublisher::with_capacity(4);
    publisher.publish(reset_event()).await.unwrap();
}

#[tokio::test]
async fn test_lagging_subscriber_skips_dropped_events() {
    let publisher = TokioEventPublisher::with_capacity(1);
    let mut stream = publisher.subscribe();

    for user_id in 1..=3 {
        publisher
            .publish(DomainEvent::PasswordResetRequested {
                user_id,
                email: "reader@example.com".to_string(),
                reset_token: "token".to_string(),
            })
            .await
            .unwrap();
    }

    let received = stream.next().await.unwrap();
    assert_eq!(received.user_id(), 3);
}

#[tokio::test]
async fn test_null_publisher_discards() {
    let publisher = NullEventPublisher::new();
    publisher.publish(reset_event()).await.unwrap();
    assert!(!publisher.has_subscribers());
}
