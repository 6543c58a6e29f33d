use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use futures::StreamExt;
use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior};

#[derive(Clone, Debug)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Resize,
}

/// Multiplexes terminal input with the refresh timer.
///
/// The timer is the loop's end-of-cycle wait. It runs on its own task so a
/// key press (quit in particular) is seen without waiting the interval out.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    tick_rate: watch::Sender<Duration>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Event>();
        let (rate_tx, mut rate_rx) = watch::channel(tick_rate);

        let task = tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            let mut tick_interval = refresh_interval(tick_rate);

            loop {
                tokio::select! {
                    maybe_event = reader.next() => {
                        match maybe_event {
                            Some(Ok(evt)) => {
                                let mapped = match evt {
                                    CrosstermEvent::Key(key) => Some(Event::Key(key)),
                                    CrosstermEvent::Resize(_, _) => Some(Event::Resize),
                                    _ => None,
                                };
                                if let Some(e) = mapped
                                    && tx.send(e).is_err()
                                {
                                    break;
                                }
                            }
                            Some(Err(_)) => break,
                            None => break,
                        }
                    }
                    _ = tick_interval.tick() => {
                        if tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                    changed = rate_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let rate = *rate_rx.borrow_and_update();
                        tick_interval = refresh_interval(rate);
                    }
                }
            }
        });

        Self {
            rx,
            tick_rate: rate_tx,
            _task: task,
        }
    }

    /// Re-arms the refresh timer; the next tick fires one full `rate` from now.
    pub fn set_tick_rate(&self, rate: Duration) {
        self.tick_rate.send_replace(rate);
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

fn refresh_interval(rate: Duration) -> tokio::time::Interval {
    let mut interval = tokio::time::interval_at(Instant::now() + rate, rate);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}
