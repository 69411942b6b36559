//! # Delayed Greeting Flows
//!
//! `slow_greet` returns before emitting, emits after its delay, and the demo
//! walkthrough drives both operations end to end.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use greeter_demo::{run_walkthrough, DETACHED_GREET_DELAY};
    use greeter_factory::{
        schedule_once, GreeterConfig, GreeterFactory, Greeting, GreetingKind, RecordingSink,
    };
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_detached_greet_on_timer_and_slow_greet_order() {
        let sink = Arc::new(RecordingSink::new());
        let factory = GreeterFactory::new(GreeterConfig::default(), sink.clone());
        let tim = factory.person("Tim", 28);

        let slow = (tim.slow_greet)().unwrap();
        let detached = Arc::clone(&tim.greet);
        let fast = schedule_once(DETACHED_GREET_DELAY, move || detached()).unwrap();
        drop(tim);

        assert!(sink.is_empty());
        fast.await.unwrap();
        slow.await.unwrap();

        assert_eq!(
            sink.greetings(),
            vec![
                Greeting::immediate("Tim, who is 28 years old, says Hi!"),
                Greeting::delayed("Tim, who is 28 years old, says Hi!"),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_slow_greets_each_keep_their_message() {
        let sink = Arc::new(RecordingSink::new());
        let config = GreeterConfig::default().with_slow_greet_delay(Duration::from_millis(300));
        let factory = GreeterFactory::new(config, sink.clone());
        let start = Instant::now();

        let a = (factory.person("Tim", 28).slow_greet)().unwrap();
        let b = (factory.person("Pamela", 27).slow_greet)().unwrap();
        a.await.unwrap();
        b.await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(300));
        let mut delayed = sink.messages(GreetingKind::Delayed);
        delayed.sort();
        assert_eq!(
            delayed,
            vec![
                "Pamela, who is 27 years old, says Hi!",
                "Tim, who is 28 years old, says Hi!"
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_walkthrough_waits_for_slow_greet() {
        let sink = Arc::new(RecordingSink::new());
        let factory = GreeterFactory::new(GreeterConfig::default(), sink.clone());
        let start = Instant::now();

        run_walkthrough(&factory).await.unwrap();

        assert!(start.elapsed() >= factory.config().slow_greet_delay);
        assert_eq!(sink.len(), 5);
        assert_eq!(
            sink.greetings().last(),
            Some(&Greeting::delayed("Tim, who is 28 years old, says Hi!"))
        );
    }
}
