use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use corebars::event::Event;
use corebars::net::Update;
use corebars::net::http::spawn_poller;
use tokio::sync::mpsc;

async fn settle() {
    // Let the poller and its spawned fetches run to completion.
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn one_fetch_per_tick_when_responses_are_prompt() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let calls = Arc::new(AtomicUsize::new(0));

    let fetch_calls = Arc::clone(&calls);
    let _poller = spawn_poller(
        Duration::from_millis(1000),
        move || {
            let calls = Arc::clone(&fetch_calls);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Update::Bars(vec![1.0])
            }
        },
        tx,
    );
    settle().await;

    // Nothing happens before the first full period elapses.
    tokio::time::advance(Duration::from_millis(999)).await;
    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(rx.try_recv().is_err());

    for expected in 1..=3 {
        tokio::time::advance(Duration::from_millis(1000)).await;
        settle().await;

        assert_eq!(calls.load(Ordering::SeqCst), expected);
        let event = rx.try_recv().expect("exactly one update per tick");
        assert!(matches!(event, Event::Update(Update::Bars(_))));
        assert!(rx.try_recv().is_err(), "no duplicated cycle within a tick");
    }
}

#[tokio::test(start_paused = true)]
async fn slow_responses_overlap_and_the_last_completion_wins() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let calls = Arc::new(AtomicUsize::new(0));

    // Each fetch takes 2.5 periods, so three requests are in flight at once.
    let fetch_calls = Arc::clone(&calls);
    let _poller = spawn_poller(
        Duration::from_millis(1000),
        move || {
            let seq = fetch_calls.fetch_add(1, Ordering::SeqCst);
            async move {
                tokio::time::sleep(Duration::from_millis(2500)).await;
                Update::Bars(vec![seq as f64])
            }
        },
        tx,
    );
    settle().await;

    // Ticks at 1s, 2s, 3s; completions land at 3.5s, 4.5s, 5.5s.
    for _ in 0..6 {
        tokio::time::advance(Duration::from_millis(1000)).await;
        settle().await;
    }

    assert!(calls.load(Ordering::SeqCst) >= 3, "ticks kept firing while requests were in flight");

    let mut seen = Vec::new();
    while let Ok(Event::Update(Update::Bars(sample))) = rx.try_recv() {
        seen.push(sample[0] as usize);
    }
    assert_eq!(seen.len(), 3);
    // Completion order follows request order here; the final render holds the
    // most recently completed response.
    assert_eq!(seen, vec![0, 1, 2]);
    assert_eq!(*seen.last().unwrap(), 2);
}
