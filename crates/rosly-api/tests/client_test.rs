// Client behavior tests with an in-memory connection.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use rosly_api::{Client, Command, Connection, Error, Record, Reply};

/// Connection that records how many commands are in flight at once.
struct OverlapProbe {
    in_flight: Arc<AtomicUsize>,
    max_seen: Arc<AtomicUsize>,
    executed: Arc<AtomicUsize>,
}

impl Connection for OverlapProbe {
    fn execute(&mut self, _command: &Command) -> Result<Reply, Error> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_seen.fetch_max(now, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(2));
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.executed.fetch_add(1, Ordering::SeqCst);
        Ok(Reply::default())
    }

    fn close(&mut self) {}
}

#[test]
fn run_serializes_commands_across_threads() {
    let in_flight = Arc::new(AtomicUsize::new(0));
    let max_seen = Arc::new(AtomicUsize::new(0));
    let executed = Arc::new(AtomicUsize::new(0));

    let client = Arc::new(Client::new(OverlapProbe {
        in_flight: Arc::clone(&in_flight),
        max_seen: Arc::clone(&max_seen),
        executed: Arc::clone(&executed),
    }));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = Arc::clone(&client);
            thread::spawn(move || {
                let cmd = Command::new("/system/identity/print");
                client.run(&cmd).expect("stub never fails");
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    assert_eq!(executed.load(Ordering::SeqCst), 8);
    // The whole point of the client: never two commands in flight.
    assert_eq!(max_seen.load(Ordering::SeqCst), 1);
}

/// Connection that always fails, to check error passthrough.
struct FailingConn;

impl Connection for FailingConn {
    fn execute(&mut self, _command: &Command) -> Result<Reply, Error> {
        Err(Error::transport("connection reset by peer"))
    }

    fn close(&mut self) {}
}

#[test]
fn run_propagates_transport_errors_unchanged() {
    let client = Client::new(FailingConn);
    let err = client
        .run(&Command::new("/interface/bridge/print"))
        .expect_err("stub always fails");

    assert!(err.is_transport());
    assert!(err.to_string().contains("connection reset by peer"));
}

/// Connection that records close calls.
struct CloseProbe {
    closed: Arc<AtomicUsize>,
}

impl Connection for CloseProbe {
    fn execute(&mut self, _command: &Command) -> Result<Reply, Error> {
        Ok(Reply::new(vec![Record::new()], Record::new()))
    }

    fn close(&mut self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn close_delegates_to_connection() {
    let closed = Arc::new(AtomicUsize::new(0));
    let client = Client::new(CloseProbe {
        closed: Arc::clone(&closed),
    });

    client.close();
    assert_eq!(closed.load(Ordering::SeqCst), 1);
}
