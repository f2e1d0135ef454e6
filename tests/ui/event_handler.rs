use std::time::Duration;
use taskboard::constants::DEFAULT_TICK_RATE_MS;
use taskboard::ui::core::EventHandler;

#[test]
fn test_default_tick_rate() {
    let handler = EventHandler::default();
    assert_eq!(handler.tick_rate(), Duration::from_millis(DEFAULT_TICK_RATE_MS));
}

#[tokio::test(start_paused = true)]
async fn test_render_throttling() {
    let mut handler = EventHandler::new(Duration::from_millis(50));
    assert!(!handler.should_render());

    tokio::time::advance(Duration::from_millis(17)).await;
    assert!(handler.should_render());

    handler.mark_rendered();
    assert!(!handler.should_render());
    assert!(handler.time_since_last_render() < Duration::from_millis(16));
}
