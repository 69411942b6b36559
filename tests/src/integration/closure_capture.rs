//! # Closure Capture Flows
//!
//! Operations detached from their bundle keep the message they captured,
//! including when moved across threads and tasks.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use greeter_factory::{
        compose_message, Greet, GreeterConfig, GreeterFactory, GreetingKind, RecordingSink,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn recording_factory() -> (GreeterFactory, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        (
            GreeterFactory::new(GreeterConfig::default(), sink.clone()),
            sink,
        )
    }

    fn sorted(mut messages: Vec<String>) -> Vec<String> {
        messages.sort();
        messages
    }

    // =============================================================================
    // TESTS
    // =============================================================================

    #[test]
    fn test_spec_examples() {
        let (factory, sink) = recording_factory();

        (factory.person("Tim", 28).greet)();
        (factory.person("Pamela", 27).greet)();

        assert_eq!(
            sink.messages(GreetingKind::Immediate),
            vec![
                "Tim, who is 28 years old, says Hi!",
                "Pamela, who is 27 years old, says Hi!"
            ]
        );
    }

    #[test]
    fn test_greet_matches_compose_message_for_many_inputs() {
        let (factory, sink) = recording_factory();
        let inputs = [("Ann", 0), ("Bob", 47), ("", 28), ("Zoë", 130)];

        for (name, age) in inputs {
            (factory.person(name, age).greet)();
        }

        let expected: Vec<String> = inputs
            .iter()
            .map(|(name, age)| compose_message(name, age))
            .collect();
        assert_eq!(sink.messages(GreetingKind::Immediate), expected);
    }

    #[test]
    fn test_detached_greet_called_from_other_threads() {
        let (factory, sink) = recording_factory();
        let tim: Greet = Arc::clone(&factory.person("Tim", 28).greet);
        let pamela: Greet = Arc::clone(&factory.person("Pamela", 27).greet);
        drop(factory);

        let workers: Vec<_> = (0..4)
            .map(|i| {
                let greet = if i % 2 == 0 {
                    Arc::clone(&tim)
                } else {
                    Arc::clone(&pamela)
                };
                thread::spawn(move || greet())
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(
            sorted(sink.messages(GreetingKind::Immediate)),
            vec![
                "Pamela, who is 27 years old, says Hi!",
                "Pamela, who is 27 years old, says Hi!",
                "Tim, who is 28 years old, says Hi!",
                "Tim, who is 28 years old, says Hi!",
            ]
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_many_bundles_never_cross_contaminate() {
        let (factory, sink) = recording_factory();

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let greet = Arc::clone(&factory.person(&format!("user-{}", i), i).greet);
                tokio::spawn(async move { greet() })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let expected: Vec<String> =
            sorted((0..32).map(|i| compose_message(&format!("user-{}", i), i)).collect());
        assert_eq!(sorted(sink.messages(GreetingKind::Immediate)), expected);
    }
}
